//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_result_dataset_repo;

pub use file_result_dataset_repo::FileResultDatasetRepository;
