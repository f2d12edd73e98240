//! Domain models, lookup tables, formatting and result resolution

pub mod constants;
pub mod data_source;
pub mod model;
pub mod repository;
pub mod service;

pub use data_source::{DataSource, Lookup};
