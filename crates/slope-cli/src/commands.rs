//! Command handlers

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use slope_app::app::{LookupService, ViewState};
use slope_app::config::Config;
use slope_app::repository::{load_result_rows, open_asset_store, open_data_source};
use slope_domain::constants::messages::zone_header;
use slope_domain::constants::{resolve_group_code, zone_parameters};
use slope_domain::model::UserSelection;
use slope_domain::DataSource;
use slope_domain::service::{available_options, format_soil_parameters};
use slope_infra::image_assets::asset_exists;
use slope_infra::image_index::{scan_image_index, write_image_index};
use slope_types::{LayerType, OutputFormat, Result, WaterLevel, ZoneCode};
use tracing::{error, info};

use crate::cli::{Cli, Commands};
use crate::interactive;
use crate::output::{
    output_options, output_params, output_view, OptionsReport, WaterLevelOption, ZoneOption,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dataset) = cli.dataset {
        config.dataset_path = dataset.clone();
    }
    if let Some(ref root) = cli.asset_root {
        config.asset_root = root.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Lookup {
            zone,
            depth,
            angle,
            water_level,
        } => {
            let selection = UserSelection {
                zone: zone.clone(),
                depth: depth.clone(),
                angle: angle.clone(),
                water_level: water_level.clone(),
            };
            cmd_lookup(&config, &selection, output_format)
        }

        Commands::Params { zone } => cmd_params(zone, output_format),

        Commands::Options => cmd_options(&config, output_format),

        Commands::Interactive => interactive::run(&config, output_format),

        Commands::IndexImages { output } => cmd_index_images(&config, output),

        Commands::Config {
            show,
            set_dataset,
            set_asset_root,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_dataset.clone(),
            set_asset_root.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_lookup(config: &Config, selection: &UserSelection, output_format: OutputFormat) -> Result<()> {
    // Skip the dataset read when there is nothing to look up
    let data = if selection.is_complete() {
        open_data_source(config)
    } else {
        DataSource::Unloaded
    };
    let service = LookupService::new(data, open_asset_store(config));

    let mut view = ViewState::new(asset_exists);
    let state = service.handle_input_change(selection, &mut view);
    output_view(output_format, state, view.view())
}

fn cmd_params(zone: &str, output_format: OutputFormat) -> Result<()> {
    let params = resolve_group_code(zone).map(zone_parameters);
    let table: BTreeMap<_, _> = LayerType::ALL
        .into_iter()
        .map(|layer| (layer, params.map(|p| format_soil_parameters(p.layer(layer)))))
        .collect();

    output_params(output_format, &zone_header(Some(zone)), &table)
}

fn cmd_options(config: &Config, output_format: OutputFormat) -> Result<()> {
    let dataset = match load_result_rows(config) {
        Ok(rows) => Some(available_options(&rows)),
        Err(e) => {
            error!(error = %e, "result dataset load failed");
            None
        }
    };

    let report = OptionsReport {
        zones: ZoneCode::ALL
            .into_iter()
            .map(|z| ZoneOption {
                zone: z.label(),
                group: z.group_code(),
            })
            .collect(),
        water_levels: WaterLevel::ALL
            .into_iter()
            .map(|w| WaterLevelOption {
                label: w.label(),
                key: w.key(),
                case: w.case_code(),
            })
            .collect(),
        dataset,
    };

    output_options(output_format, &report)
}

fn cmd_index_images(config: &Config, output: &Path) -> Result<()> {
    let entries = scan_image_index(&config.asset_root)?;
    write_image_index(&entries, output)?;
    info!(count = entries.len(), output = %output.display(), "image index written");
    println!("Indexed {} diagrams into {}", entries.len(), output.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_dataset: Option<PathBuf>,
    set_asset_root: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(dataset) = set_dataset {
        config.dataset_path = dataset;
        changed = true;
    }
    if let Some(root) = set_asset_root {
        config.asset_root = root;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
