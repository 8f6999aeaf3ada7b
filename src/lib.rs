//! Prints the browsing history stored in a Firefox `places.sqlite` database.

pub mod app;
pub mod cli;
pub mod columns;
pub mod config;
pub mod logging;
pub mod places;
pub mod query;
pub mod render;
pub mod snapshot;
