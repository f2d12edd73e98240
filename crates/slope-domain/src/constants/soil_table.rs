//! Soil parameters per zone and layer

use slope_types::{GroupCode, LayerType};

use crate::model::{SoilLayerParameters, ZoneParameters};

#[allow(clippy::too_many_arguments)]
const fn layer(
    unit_weight: f64,
    undrained_shear_strength: f64,
    elastic_modulus: f64,
    cohesion: f64,
    friction_angle: f64,
    void_ratio: f64,
    earth_pressure_coefficient: f64,
    permeability: f64,
) -> SoilLayerParameters {
    SoilLayerParameters {
        unit_weight,
        undrained_shear_strength,
        elastic_modulus,
        cohesion,
        friction_angle,
        poisson_ratio: 0.2,
        void_ratio,
        earth_pressure_coefficient,
        permeability_x: permeability,
        permeability_y: permeability,
    }
}

const SOFT_CLAY_K: f64 = 8.64e-7;
const STIFF_CLAY_K: f64 = 8.64e-6;
const SAND_K: f64 = 8.64e-2;

/// Zone ABC
static G1_PARAMS: ZoneParameters = ZoneParameters {
    soft: layer(20.0, 25.0, 10000.0, 0.0, 21.0, 1.4, 1.0, SOFT_CLAY_K),
    stiff: layer(18.9, 30.0, 30000.0, 0.0, 22.0, 1.3, 0.7, STIFF_CLAY_K),
    sand: layer(20.0, 0.0, 80000.0, 16.4, 32.82, 0.7, 0.5, SAND_K),
};

/// Zone D
static G2_PARAMS: ZoneParameters = ZoneParameters {
    soft: layer(16.2, 16.0, 8000.0, 0.0, 21.0, 1.776, 1.0, SOFT_CLAY_K),
    stiff: layer(16.8, 30.0, 25000.0, 0.0, 22.0, 1.345, 0.7, STIFF_CLAY_K),
    sand: layer(20.0, 0.0, 80000.0, 16.4, 32.14, 0.7, 0.5, SAND_K),
};

/// Zone EF
static G3_PARAMS: ZoneParameters = ZoneParameters {
    soft: layer(15.0, 11.0, 6000.0, 0.0, 21.0, 2.525, 1.0, SOFT_CLAY_K),
    stiff: layer(16.0, 25.0, 20000.0, 0.0, 22.0, 2.065, 0.7, STIFF_CLAY_K),
    sand: layer(20.0, 0.0, 80000.0, 16.4, 32.14, 0.7, 0.5, SAND_K),
};

/// Parameters for all layers of a group
pub fn zone_parameters(group: GroupCode) -> &'static ZoneParameters {
    match group {
        GroupCode::G1 => &G1_PARAMS,
        GroupCode::G2 => &G2_PARAMS,
        GroupCode::G3 => &G3_PARAMS,
    }
}

pub fn soil_parameters(group: GroupCode, layer: LayerType) -> &'static SoilLayerParameters {
    zone_parameters(group).layer(layer)
}
