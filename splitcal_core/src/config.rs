//! The configuration names the source feed and the calendars to derive from it.

use std::{fs::read_to_string, path::Path};

use serde::Deserialize;

use crate::error::ConfigurationError;

pub static DEFAULT_PATH: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// the iCalendar feed to split
    pub source_url: String,
    /// the calendars to derive, in the order they are written
    pub calendars: Vec<CalendarSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarSpec {
    /// the file stem of the derived calendar
    pub name: String,
    /// the keyword an event must mention to be included
    pub keyword: String,
}

impl Config {
    /// Read the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let json = read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigurationError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
