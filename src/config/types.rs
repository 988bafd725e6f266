//! Configuration types for the Attendance Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::PublicHoliday;

/// Metadata about the running service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMetadata {
    /// Human-readable service name, used in logs.
    pub name: String,
    /// Region whose holiday calendar is loaded (e.g., "JP").
    pub region: String,
    /// Socket address the HTTP API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// One holiday calendar file, covering a single year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every holiday in this file belongs to.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}
