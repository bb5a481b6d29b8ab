//! HTTP application for the forex converter service.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use config::Config;
pub use main_lib::{build_state, AppState};
