//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! metadata and holiday calendars from YAML files.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, HolidayOracle};

use super::types::{HolidayFile, ServiceMetadata};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/jp/
/// ├── service.yaml     # Service metadata
/// └── holidays/
///     └── 2026.yaml    # Public holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::HolidayOracle;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/jp").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 11, 3).unwrap();
/// println!("{:?}", loader.holiday_name(date));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service: ServiceMetadata,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `service.yaml` or the `holidays`
    ///   directory is missing, or the directory holds no `.yaml` files
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML, or a
    ///   holiday file lists a date outside its `year`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceMetadata>(&path.join("service.yaml"))?;
        let calendar = Self::load_holidays(&path.join("holidays"))?;

        Ok(Self { service, calendar })
    }

    /// Creates a loader from already-built parts.
    pub fn from_parts(service: ServiceMetadata, calendar: HolidayCalendar) -> Self {
        Self { service, calendar }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file in the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        // Directory order is platform dependent; load oldest year first.
        paths.sort();

        let mut calendar = HolidayCalendar::default();
        for path in paths {
            let file = Self::load_yaml::<HolidayFile>(&path)?;

            if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} is not in year {}", stray.date, file.year),
                });
            }

            debug!(
                path = %path.display(),
                year = file.year,
                holidays = file.holidays.len(),
                "Loaded holiday file"
            );
            calendar.extend(file.holidays);
        }

        Ok(calendar)
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.service
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

impl HolidayOracle for ConfigLoader {
    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.calendar.holiday_name(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn config_path() -> &'static str {
        "./config/jp"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.service().region, "JP");
        assert_eq!(loader.service().bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_holiday_lookup() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.holiday_name(make_date("2026-01-01")), Some("New Year's Day"));
        assert_eq!(loader.holiday_name(make_date("2026-11-03")), Some("Culture Day"));
        assert!(!loader.is_holiday(make_date("2026-01-02")));
    }

    #[test]
    fn test_substitute_holiday_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        // Constitution Memorial Day 2026 falls on a Sunday
        assert!(loader.is_holiday(make_date("2026-05-06")));
    }

    #[test]
    fn test_holidays_for_january() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let january: Month = "2026-01".parse().unwrap();

        let holidays = loader.calendar().holidays_in(&january);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[1].date, make_date("2026-01-12"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_parts() {
        let loader = ConfigLoader::from_parts(
            ServiceMetadata {
                name: "test".to_string(),
                region: "JP".to_string(),
                bind_address: "127.0.0.1:0".to_string(),
            },
            HolidayCalendar::default(),
        );
        assert!(loader.calendar().is_empty());
        assert!(!loader.is_holiday(make_date("2026-01-01")));
    }
}
