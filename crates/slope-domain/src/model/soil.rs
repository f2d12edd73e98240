//! Soil layer parameter type definitions

use serde::Serialize;
use slope_types::LayerType;

/// Material parameters of one soil layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilLayerParameters {
    /// γ (kN/m³)
    pub unit_weight: f64,
    /// Su (kPa)
    pub undrained_shear_strength: f64,
    /// E (kPa)
    pub elastic_modulus: f64,
    /// c' (kPa)
    pub cohesion: f64,
    /// φ' (°)
    pub friction_angle: f64,
    /// ν
    pub poisson_ratio: f64,
    /// e
    pub void_ratio: f64,
    /// K₀
    pub earth_pressure_coefficient: f64,
    /// kx (m/day)
    pub permeability_x: f64,
    /// ky (m/day)
    pub permeability_y: f64,
}

/// Parameters of the three layers of a zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneParameters {
    pub soft: SoilLayerParameters,
    pub stiff: SoilLayerParameters,
    pub sand: SoilLayerParameters,
}

impl ZoneParameters {
    pub fn layer(&self, layer: LayerType) -> &SoilLayerParameters {
        match layer {
            LayerType::Soft => &self.soft,
            LayerType::Stiff => &self.stiff,
            LayerType::Sand => &self.sand,
        }
    }
}
