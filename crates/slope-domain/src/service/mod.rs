//! Domain services

pub mod asset_path;
pub mod formatter;
pub mod resolver;

pub use asset_path::{image_asset_path, parse_image_file_name, ImageFileName};
pub use formatter::{
    format_decimal, format_displacement, format_plain, format_scientific, format_soil_parameters,
    FormattedSoilParameters,
};
pub use resolver::{available_options, find_result, GroupOptions};
