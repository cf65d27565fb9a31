//! This crate splits a single iCalendar feed into several smaller calendars.
//! It also implements the pipeline the CLI runs to write them to disk.
//!
//! Events are sorted into calendars by keywords found in their `SUMMARY`, `DESCRIPTION` or `LOCATION` lines.

pub mod calendar;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source_client;
