//! Domain model types

pub mod cell_value;
pub mod result_row;
pub mod selection;
pub mod soil;

pub use cell_value::CellValue;
pub use result_row::{canonical_depth, normalize_angle, strip_depth_unit, ResultRow};
pub use selection::{SelectionField, SelectionState, UserSelection};
pub use soil::{SoilLayerParameters, ZoneParameters};
