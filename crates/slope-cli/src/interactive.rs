//! Line-oriented interactive session
//!
//! Each line changes one selector (`zone=ABC`, `depth=5`, `angle=15`,
//! `water=rapid`) and redraws, like changing a drop-down in the viewer.

use std::io::BufRead;

use slope_app::app::{spawn_dataset_load, LookupService, ViewState};
use slope_app::config::Config;
use slope_app::repository::open_asset_store;
use slope_domain::model::{SelectionField, UserSelection};
use slope_domain::DataSource;
use slope_infra::image_assets::asset_exists;
use slope_types::{OutputFormat, Result};
use tracing::info;

use crate::output::output_view;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand<'a> {
    Set(SelectionField, &'a str),
    Clear,
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

pub fn parse_line(line: &str) -> SessionCommand<'_> {
    let line = line.trim();
    match line {
        "" | "show" => SessionCommand::Show,
        "clear" | "reset" => SessionCommand::Clear,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => match line.split_once('=') {
            Some((key, value)) => match SelectionField::from_key(key) {
                Some(field) => SessionCommand::Set(field, value.trim()),
                None => SessionCommand::Unknown(line),
            },
            None => SessionCommand::Unknown(line),
        },
    }
}

const HELP: &str = "\
Commands:
  zone=<ABC|D|EF>          select zone
  depth=<m>                select excavation depth
  angle=<deg>              select embankment angle
  water=<surface|none|rapid>  select water level
  clear                    clear all selectors
  show                     redraw
  quit                     leave";

pub fn run(config: &Config, output_format: OutputFormat) -> Result<()> {
    let mut loading = spawn_dataset_load(config.dataset_path.clone());
    let mut service = LookupService::new(DataSource::Unloaded, open_asset_store(config));
    let mut selection = UserSelection::default();

    eprintln!("{}", HELP);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        if let Some(rows) = loading.poll() {
            service.install_dataset(rows);
        }

        match parse_line(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                eprintln!("{}", HELP);
                continue;
            }
            SessionCommand::Unknown(text) => {
                eprintln!("Unknown command: {} (type 'help')", text);
                continue;
            }
            SessionCommand::Clear => selection.clear(),
            SessionCommand::Set(field, value) => selection.set(field, value),
            SessionCommand::Show => {}
        }

        let mut view = ViewState::new(asset_exists);
        let state = service.handle_input_change(&selection, &mut view);
        output_view(output_format, state, view.view())?;
    }

    info!("interactive session ended");
    Ok(())
}
