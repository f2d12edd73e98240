//! Output formatting module

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use slope_app::app::LookupView;
use slope_domain::model::SelectionState;
use slope_domain::service::{FormattedSoilParameters, GroupOptions};
use slope_types::{CaseCode, GroupCode, LayerType, OutputFormat, Result};

/// One interaction cycle as printed
#[derive(Serialize)]
struct LookupReport<'a> {
    state: SelectionState,
    #[serde(flatten)]
    view: &'a LookupView,
}

pub fn output_view(output_format: OutputFormat, state: SelectionState, view: &LookupView) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&LookupReport { state, view })?;
        println!("{}", content);
    } else {
        print!("{}", view_table(state, view));
    }
    Ok(())
}

pub fn view_table(state: SelectionState, view: &LookupView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSlope Stability Result");
    let _ = writeln!(out, "======================");

    if state == SelectionState::Incomplete {
        if let Some(ref message) = view.message {
            let _ = writeln!(out, "{}", message);
        }
        return out;
    }

    if !view.dataset_available {
        let _ = writeln!(out, "Result dataset is not available");
    }
    let _ = writeln!(out, "Factor of safety: {}", view.factor_of_safety);
    let _ = writeln!(out, "Displacement:     {}", view.displacement);

    match (&view.image_path, view.image_shown) {
        (Some(path), true) => {
            let _ = writeln!(out, "Diagram:          {}", path.display());
        }
        (Some(path), false) => {
            let _ = writeln!(out, "Diagram:          {} (missing)", path.display());
        }
        (None, _) => {}
    }
    if let Some(ref message) = view.message {
        let _ = writeln!(out, "                  {}", message);
    }

    out.push('\n');
    out.push_str(&params_table(&view.zone_header, &view.params));
    out
}

const PARAM_NAMES: [&str; 10] = [
    "γ (kN/m³)",
    "Su (kPa)",
    "E (kPa)",
    "c' (kPa)",
    "φ' (°)",
    "ν",
    "e",
    "K₀",
    "kx (m/day)",
    "ky (m/day)",
];

fn param_values(p: &FormattedSoilParameters) -> [&str; 10] {
    [
        p.unit_weight.as_str(),
        p.undrained_shear_strength.as_str(),
        p.elastic_modulus.as_str(),
        p.cohesion.as_str(),
        p.friction_angle.as_str(),
        p.poisson_ratio.as_str(),
        p.void_ratio.as_str(),
        p.earth_pressure_coefficient.as_str(),
        p.permeability_x.as_str(),
        p.permeability_y.as_str(),
    ]
}

/// Parameter table with one column per layer
pub fn params_table(
    header: &str,
    params: &BTreeMap<LayerType, Option<FormattedSoilParameters>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header);
    let _ = write!(out, "{:<14}", "Parameter");
    for layer in LayerType::ALL {
        let _ = write!(out, "{:<18}", layer.label());
    }
    out.push('\n');

    let columns: Vec<Option<[&str; 10]>> = LayerType::ALL
        .iter()
        .map(|layer| params.get(layer).and_then(|p| p.as_ref()).map(param_values))
        .collect();

    for (row, name) in PARAM_NAMES.iter().enumerate() {
        let _ = write!(out, "{:<14}", name);
        for column in &columns {
            let value = column.map(|values| values[row]).unwrap_or("-");
            let _ = write!(out, "{:<18}", value);
        }
        out.push('\n');
    }
    out
}

pub fn output_params(
    output_format: OutputFormat,
    header: &str,
    params: &BTreeMap<LayerType, Option<FormattedSoilParameters>>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        #[derive(Serialize)]
        struct ParamsReport<'a> {
            zone_header: &'a str,
            params: &'a BTreeMap<LayerType, Option<FormattedSoilParameters>>,
        }
        let content = serde_json::to_string_pretty(&ParamsReport {
            zone_header: header,
            params,
        })?;
        println!("{}", content);
    } else {
        print!("{}", params_table(header, params));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ZoneOption {
    pub zone: &'static str,
    pub group: GroupCode,
}

#[derive(Debug, Serialize)]
pub struct WaterLevelOption {
    pub label: &'static str,
    pub key: &'static str,
    pub case: CaseCode,
}

#[derive(Debug, Serialize)]
pub struct OptionsReport {
    pub zones: Vec<ZoneOption>,
    pub water_levels: Vec<WaterLevelOption>,
    /// `None` when the dataset could not be loaded
    pub dataset: Option<BTreeMap<GroupCode, GroupOptions>>,
}

pub fn output_options(output_format: OutputFormat, report: &OptionsReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nZones");
    println!("=====");
    for z in &report.zones {
        println!("  {:<4} -> {}", z.zone, z.group);
    }

    println!("\nWater levels");
    println!("============");
    for w in &report.water_levels {
        println!("  {:<8} {:<6} {}", w.key, w.case, w.label);
    }

    println!("\nDataset");
    println!("=======");
    match &report.dataset {
        Some(groups) if !groups.is_empty() => {
            for (group, options) in groups {
                let depths: Vec<String> = options.depths.iter().map(|d| d.to_string()).collect();
                let cases: Vec<&str> = options.cases.iter().map(|c| c.as_str()).collect();
                println!("  {}", group);
                println!("    Depths (m): {}", depths.join(", "));
                println!("    Angles (°): {}", options.angles.join(", "));
                println!("    Cases:      {}", cases.join(", "));
            }
        }
        Some(_) => println!("  (empty)"),
        None => println!("  (not available)"),
    }

    Ok(())
}
