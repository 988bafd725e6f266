//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the service settings and the public holiday calendar
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/jp").unwrap();
//! println!("Loaded {} holidays", config.calendar().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayFile, ServiceMetadata};
