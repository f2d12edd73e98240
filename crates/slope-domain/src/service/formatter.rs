//! Display formatting for result values and soil parameters

use serde::Serialize;

use crate::model::{CellValue, SoilLayerParameters};

/// Shown in place of a value that is missing
pub const ABSENT_MARK: &str = "-";

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';

/// Render a value as `d.dd × 10ⁿ`, e.g. `8.64e-7` → `"8.64 × 10⁻⁷"`
pub fn format_scientific(value: &CellValue) -> String {
    let Some(num) = value.as_number() else {
        return ABSENT_MARK.to_string();
    };

    let (mantissa, exponent) = scientific_parts(num, 2);
    format!("{:.2} × 10{}", mantissa, superscript(&exponent.to_string()))
}

/// Split into a mantissa in `[1, 10)` rounded to `digits` decimals and a power of ten
fn scientific_parts(num: f64, digits: usize) -> (f64, i32) {
    if num == 0.0 {
        return (0.0, 0);
    }

    let mut exponent = num.abs().log10().floor() as i32;
    let mut mantissa = num / 10f64.powi(exponent);
    // log10 can land one off near exact powers of ten
    if mantissa.abs() < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }

    mantissa = round_half_away(mantissa, digits);
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    (mantissa, exponent)
}

fn superscript(exponent: &str) -> String {
    exponent
        .chars()
        .filter_map(|c| match c {
            '-' => Some(SUPERSCRIPT_MINUS),
            _ => c.to_digit(10).map(|d| SUPERSCRIPT_DIGITS[d as usize]),
        })
        .collect()
}

/// Render a value with exactly `digits` decimals
///
/// Missing or unparseable values render as zero (`"0.000"` for 3 digits).
/// Halfway cases round away from zero.
pub fn format_decimal(value: &CellValue, digits: usize) -> String {
    let num = value.as_number().unwrap_or(0.0);
    format!("{:.*}", digits, round_half_away(num, digits))
}

fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Displacement with one decimal and unit, e.g. `"0.1 m"`
pub fn format_displacement(value: &CellValue) -> String {
    format!("{} m", format_decimal(value, 1))
}

/// Render a table value as-is, or `"-"` when missing
pub fn format_plain(value: &CellValue) -> String {
    value.as_text().unwrap_or_else(|| ABSENT_MARK.to_string())
}

/// Display strings for one soil layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSoilParameters {
    pub unit_weight: String,
    pub undrained_shear_strength: String,
    pub elastic_modulus: String,
    pub cohesion: String,
    pub friction_angle: String,
    pub poisson_ratio: String,
    pub void_ratio: String,
    pub earth_pressure_coefficient: String,
    pub permeability_x: String,
    pub permeability_y: String,
}

pub fn format_soil_parameters(params: &SoilLayerParameters) -> FormattedSoilParameters {
    let plain = |v: f64| format_plain(&CellValue::from(v));
    let sci = |v: f64| format_scientific(&CellValue::from(v));

    FormattedSoilParameters {
        unit_weight: plain(params.unit_weight),
        undrained_shear_strength: plain(params.undrained_shear_strength),
        elastic_modulus: plain(params.elastic_modulus),
        cohesion: plain(params.cohesion),
        friction_angle: plain(params.friction_angle),
        poisson_ratio: plain(params.poisson_ratio),
        void_ratio: plain(params.void_ratio),
        earth_pressure_coefficient: plain(params.earth_pressure_coefficient),
        permeability_x: sci(params.permeability_x),
        permeability_y: sci(params.permeability_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::soil_parameters;
    use slope_types::{GroupCode, LayerType};

    #[test]
    fn test_scientific_small_value() {
        assert_eq!(format_scientific(&CellValue::from(8.64e-7)), "8.64 × 10⁻⁷");
        assert_eq!(format_scientific(&CellValue::from(0.5)), "5.00 × 10⁻¹");
    }

    #[test]
    fn test_scientific_positive_and_zero_exponent() {
        assert_eq!(format_scientific(&CellValue::from(80000.0)), "8.00 × 10⁴");
        assert_eq!(format_scientific(&CellValue::from(3.0)), "3.00 × 10⁰");
        assert_eq!(format_scientific(&CellValue::from(1.5e12)), "1.50 × 10¹²");
    }

    #[test]
    fn test_scientific_rounds_half_away_from_zero() {
        assert_eq!(format_scientific(&CellValue::from(1.125)), "1.13 × 10⁰");
        assert_eq!(format_scientific(&CellValue::from(-1.125)), "-1.13 × 10⁰");
        assert_eq!(format_scientific(&CellValue::from(112.5)), "1.13 × 10²");
    }

    #[test]
    fn test_scientific_carries_into_exponent() {
        assert_eq!(format_scientific(&CellValue::from(9.996)), "1.00 × 10¹");
        assert_eq!(format_scientific(&CellValue::from(1000.0)), "1.00 × 10³");
        assert_eq!(format_scientific(&CellValue::from(1e-7)), "1.00 × 10⁻⁷");
    }

    #[test]
    fn test_scientific_accepts_numeric_text() {
        assert_eq!(format_scientific(&CellValue::from("8.64e-2")), "8.64 × 10⁻²");
    }

    #[test]
    fn test_scientific_absent_forms() {
        for value in [
            CellValue::Absent,
            CellValue::from(""),
            CellValue::from("-"),
            CellValue::from("N/A"),
            CellValue::from("clay"),
            CellValue::Number(f64::NAN),
        ] {
            assert_eq!(format_scientific(&value), "-", "{value:?}");
        }
    }

    #[test]
    fn test_scientific_keeps_order_of_magnitude() {
        for e in -9..=9 {
            for m in [1.0, 2.5, 4.56, 8.64, 9.99] {
                let value = m * 10f64.powi(e);
                let out = format_scientific(&CellValue::from(value));
                let (mantissa, power) = out.split_once(" × 10").unwrap();
                assert_eq!(power, superscript(&e.to_string()), "{value}");
                let mantissa: f64 = mantissa.parse().unwrap();
                assert!((mantissa - m).abs() < 0.006, "{value} -> {out}");
            }
        }
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(format_decimal(&CellValue::from(1.234), 3), "1.234");
        assert_eq!(format_decimal(&CellValue::from(1.5), 3), "1.500");
        assert_eq!(format_decimal(&CellValue::from(0.05), 1), "0.1");
        assert_eq!(format_decimal(&CellValue::from("2.26"), 1), "2.3");
        assert_eq!(format_decimal(&CellValue::from(12.0), 1), "12.0");
    }

    #[test]
    fn test_decimal_rounds_half_away_from_zero() {
        assert_eq!(format_decimal(&CellValue::from(0.25), 1), "0.3");
        assert_eq!(format_decimal(&CellValue::from(2.5), 0), "3");
        assert_eq!(format_decimal(&CellValue::from(-0.25), 1), "-0.3");
    }

    #[test]
    fn test_decimal_fallback() {
        assert_eq!(format_decimal(&CellValue::Absent, 3), "0.000");
        assert_eq!(format_decimal(&CellValue::from("N/A"), 3), "0.000");
        assert_eq!(format_decimal(&CellValue::from("x"), 1), "0.0");
        assert_eq!(format_decimal(&CellValue::from(""), 1), "0.0");
    }

    #[test]
    fn test_decimal_always_has_exact_digits() {
        for value in [0.0, 0.0004, 1.0, 3.14159, 12.3456, 100.05, 7.0] {
            let out = format_decimal(&CellValue::from(value), 3);
            assert_eq!(out.split_once('.').unwrap().1.len(), 3, "{out}");
            let out = format_decimal(&CellValue::from(value), 1);
            assert_eq!(out.split_once('.').unwrap().1.len(), 1, "{out}");
        }
    }

    #[test]
    fn test_displacement_unit() {
        assert_eq!(format_displacement(&CellValue::from(0.05)), "0.1 m");
        assert_eq!(format_displacement(&CellValue::Absent), "0.0 m");
    }

    #[test]
    fn test_soil_parameters_display() {
        let f = format_soil_parameters(soil_parameters(GroupCode::G1, LayerType::Stiff));
        assert_eq!(f.unit_weight, "18.9");
        assert_eq!(f.elastic_modulus, "30000");
        assert_eq!(f.poisson_ratio, "0.2");
        assert_eq!(f.permeability_x, "8.64 × 10⁻⁶");
        assert_eq!(f.permeability_y, "8.64 × 10⁻⁶");
    }
}
