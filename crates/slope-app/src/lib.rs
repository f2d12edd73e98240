//! Application service layer - config, presentation contract, lookup use case

pub mod app;
pub mod config;
pub mod presentation;
pub mod repository;
