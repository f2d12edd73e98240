//! Application use cases

pub mod background_load;
pub mod lookup_service;
pub mod view;

pub use background_load::{spawn_dataset_load, DatasetLoadHandle};
pub use lookup_service::LookupService;
pub use view::{LookupView, ViewState};
