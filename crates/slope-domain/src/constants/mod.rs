//! Static lookup tables and display constants

pub mod messages;
pub mod soil_table;
pub mod zone_map;

pub use soil_table::{soil_parameters, zone_parameters};
pub use zone_map::{resolve_case_code, resolve_group_code};
