//! End-to-end lookup flow against the fixture dataset

use std::fs;
use std::path::{Path, PathBuf};

use slope_app::app::{LookupService, LookupView, ViewState};
use slope_app::config::Config;
use slope_app::repository::{open_asset_store, open_data_source};
use slope_domain::constants::messages::{IMAGE_MISSING_MESSAGE, PLACEHOLDER_MESSAGE};
use slope_domain::model::{SelectionState, UserSelection};
use slope_infra::image_assets::asset_exists;
use slope_types::LayerType;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

fn config_with_assets(asset_root: &Path) -> Config {
    Config {
        dataset_path: fixtures_dir().join("PTT_FS.json"),
        asset_root: asset_root.to_path_buf(),
        ..Config::default()
    }
}

fn run(config: &Config, selection: &UserSelection) -> (SelectionState, LookupView) {
    let service = LookupService::new(open_data_source(config), open_asset_store(config));
    let mut view = ViewState::new(asset_exists);
    let state = service.handle_input_change(selection, &mut view);
    (state, view.into_view())
}

#[test]
fn test_match_with_diagram() {
    let assets = tempdir().unwrap();
    let diagram = assets
        .path()
        .join("G1")
        .join("G1_WET_ADDEDFailureline")
        .join("G1_WET_15_5m.png");
    fs::create_dir_all(diagram.parent().unwrap()).unwrap();
    fs::write(&diagram, b"png").unwrap();

    let config = config_with_assets(assets.path());
    let (state, view) = run(&config, &UserSelection::new("ABC", "5", "15", "ผิวดิน"));

    assert_eq!(state, SelectionState::Complete);
    assert_eq!(view.factor_of_safety, "1.234");
    assert_eq!(view.displacement, "0.1 m");
    assert_eq!(view.zone_header, "Zone ABC");
    assert!(view.image_shown);
    assert_eq!(view.image_path.as_deref(), Some(diagram.as_path()));
    assert!(view.message.is_none());

    let soft = view.params[&LayerType::Soft].as_ref().unwrap();
    assert_eq!(soft.unit_weight, "20");
    assert_eq!(soft.permeability_x, "8.64 × 10⁻⁷");
}

#[test]
fn test_no_match_and_missing_diagram() {
    let assets = tempdir().unwrap();
    let config = config_with_assets(assets.path());
    let (_, view) = run(&config, &UserSelection::new("ABC", "5", "20", "ผิวดิน"));

    assert_eq!(view.factor_of_safety, "0.000");
    assert_eq!(view.displacement, "0.0 m");
    assert!(!view.image_shown);
    assert_eq!(view.message.as_deref(), Some(IMAGE_MISSING_MESSAGE));
}

#[test]
fn test_text_cells_fall_back_to_zero() {
    let assets = tempdir().unwrap();
    let config = config_with_assets(assets.path());

    let (_, view) = run(&config, &UserSelection::new("D", "3", "30°", "surface"));
    assert_eq!(view.factor_of_safety, "1.100");
    assert_eq!(view.displacement, "0.0 m");

    let (_, view) = run(&config, &UserSelection::new("EF", "10", "45", "none"));
    assert_eq!(view.factor_of_safety, "0.000");
    assert_eq!(view.displacement, "0.0 m");
}

#[test]
fn test_duplicate_key_uses_first_row() {
    let assets = tempdir().unwrap();
    let config = config_with_assets(assets.path());
    let (_, view) = run(&config, &UserSelection::new("ABC", "5.0", " 15° ", "surface"));
    assert_eq!(view.factor_of_safety, "1.234");
}

#[test]
fn test_missing_input_shows_placeholder() {
    let assets = tempdir().unwrap();
    let config = config_with_assets(assets.path());
    let mut selection = UserSelection::new("ABC", "5", "15", "ผิวดิน");
    selection.depth = Some(String::new());

    let (state, view) = run(&config, &selection);
    assert_eq!(state, SelectionState::Incomplete);
    assert_eq!(view.message.as_deref(), Some(PLACEHOLDER_MESSAGE));
    assert_eq!(view.factor_of_safety, "0.000");
}

#[test]
fn test_missing_dataset_degrades() {
    let assets = tempdir().unwrap();
    let config = Config {
        dataset_path: assets.path().join("absent.json"),
        asset_root: assets.path().to_path_buf(),
        ..Config::default()
    };
    let (state, view) = run(&config, &UserSelection::new("ABC", "5", "15", "ผิวดิน"));

    assert_eq!(state, SelectionState::Complete);
    assert!(!view.dataset_available);
    assert_eq!(view.zone_header, "Zone ABC");
    assert!(view.params[&LayerType::Sand].is_some());
}

#[test]
fn test_depth_with_unit_finds_diagram() {
    let assets = tempdir().unwrap();
    let diagram = assets
        .path()
        .join("G1")
        .join("G1_DRY_ADDEDFailureline")
        .join("G1_DRY_15_5m.png");
    fs::create_dir_all(diagram.parent().unwrap()).unwrap();
    fs::write(&diagram, b"png").unwrap();

    let config = config_with_assets(assets.path());
    let (_, view) = run(&config, &UserSelection::new("ABC", "5m", "15", "none"));

    assert_eq!(view.factor_of_safety, "1.512");
    assert!(view.image_shown);
    assert_eq!(view.image_path.as_deref(), Some(diagram.as_path()));
}
