//! Lookup Service - one interaction cycle of the slope stability viewer
//!
//! On every selector change:
//! 1. Check that all four selectors are filled
//! 2. Show the soil parameter table for the zone
//! 3. Look up the precomputed factor of safety and displacement
//! 4. Show the matching failure-line diagram

use slope_domain::constants::messages::{
    zone_header, EMPTY_DISPLACEMENT, EMPTY_FACTOR_OF_SAFETY, IMAGE_MISSING_MESSAGE,
    PLACEHOLDER_MESSAGE,
};
use slope_domain::constants::{resolve_case_code, resolve_group_code, zone_parameters};
use slope_domain::model::{ResultRow, SelectionState, UserSelection};
use slope_domain::service::{format_decimal, format_displacement, format_soil_parameters};
use slope_domain::{DataSource, Lookup};
use slope_infra::image_assets::ImageAssetStore;
use slope_types::{CaseCode, GroupCode, LayerType};
use tracing::debug;

use crate::presentation::{ImageOutcome, PresentationAdapter};

/// Selection keys after classification
struct ResolvedSelection<'a> {
    zone: &'a str,
    group: Option<GroupCode>,
    case: Option<CaseCode>,
    depth: &'a str,
    angle: &'a str,
}

pub struct LookupService {
    data: DataSource,
    assets: ImageAssetStore,
}

impl LookupService {
    pub fn new(data: DataSource, assets: ImageAssetStore) -> Self {
        Self { data, assets }
    }

    pub fn data(&self) -> &DataSource {
        &self.data
    }

    /// Hand over a dataset that finished loading after startup
    pub fn install_dataset(&mut self, rows: Vec<ResultRow>) -> bool {
        self.data.install(rows)
    }

    /// React to a selector change and redraw through `adapter`
    pub fn handle_input_change<A>(&self, selection: &UserSelection, adapter: &mut A) -> SelectionState
    where
        A: PresentationAdapter + ?Sized,
    {
        let Some(resolved) = resolve(selection) else {
            debug!("selection incomplete, showing placeholder");
            reset_display(adapter);
            return SelectionState::Incomplete;
        };

        show_zone(&resolved, adapter);
        self.show_result(&resolved, adapter);
        self.show_diagram(&resolved, adapter);

        SelectionState::Complete
    }

    fn show_result<A>(&self, sel: &ResolvedSelection<'_>, adapter: &mut A)
    where
        A: PresentationAdapter + ?Sized,
    {
        if !self.data.is_loaded() {
            adapter.show_dataset_unavailable();
            return;
        }

        let (Some(group), Some(case)) = (sel.group, sel.case) else {
            adapter.show_result(EMPTY_FACTOR_OF_SAFETY, EMPTY_DISPLACEMENT);
            return;
        };

        match self.data.lookup(group, sel.depth, case, sel.angle) {
            Lookup::Found(row) => {
                let fs = format_decimal(&row.factor_of_safety, 3);
                let displacement = format_displacement(&row.displacement);
                adapter.show_result(&fs, &displacement);
            }
            Lookup::NoMatch => adapter.show_result(EMPTY_FACTOR_OF_SAFETY, EMPTY_DISPLACEMENT),
            Lookup::Unavailable => adapter.show_dataset_unavailable(),
        }
    }

    fn show_diagram<A>(&self, sel: &ResolvedSelection<'_>, adapter: &mut A)
    where
        A: PresentationAdapter + ?Sized,
    {
        let (Some(group), Some(case)) = (sel.group, sel.case) else {
            adapter.show_image_missing(IMAGE_MISSING_MESSAGE);
            return;
        };

        let path = self.assets.path_for(group, case, sel.angle, sel.depth);
        if adapter.show_image(&path) == ImageOutcome::Failed {
            debug!(path = %path.display(), "diagram not available");
            adapter.show_image_missing(IMAGE_MISSING_MESSAGE);
        }
    }
}

fn resolve(selection: &UserSelection) -> Option<ResolvedSelection<'_>> {
    if !selection.is_complete() {
        return None;
    }
    let zone = selection.zone.as_deref()?;
    let water_level = selection.water_level.as_deref()?;

    Some(ResolvedSelection {
        zone,
        group: resolve_group_code(zone),
        case: resolve_case_code(water_level),
        depth: selection.depth.as_deref()?,
        angle: selection.angle.as_deref()?,
    })
}

fn reset_display<A>(adapter: &mut A)
where
    A: PresentationAdapter + ?Sized,
{
    adapter.show_result(EMPTY_FACTOR_OF_SAFETY, EMPTY_DISPLACEMENT);
    adapter.show_zone_header(&zone_header(None));
    for layer in LayerType::ALL {
        adapter.show_params(layer, None);
    }
    adapter.show_placeholder(PLACEHOLDER_MESSAGE);
}

fn show_zone<A>(sel: &ResolvedSelection<'_>, adapter: &mut A)
where
    A: PresentationAdapter + ?Sized,
{
    adapter.show_zone_header(&zone_header(Some(sel.zone)));

    let params = sel.group.map(zone_parameters);
    for layer in LayerType::ALL {
        let formatted = params.map(|p| format_soil_parameters(p.layer(layer)));
        adapter.show_params(layer, formatted.as_ref());
    }
}
