//! The run which turns the configured feed into derived calendar files.

use std::{fs::create_dir_all, path::Path};

use log::{debug, info};

use crate::{
    calendar::{self, event_matches, WrittenCalendar},
    config::Config,
    error::Error,
    source_client,
};

pub static DEFAULT_OUTPUT_DIR: &str = "docs";

/// Fetch the configured feed once and write one calendar per configured keyword.
///
/// Nothing is fetched or created if the configuration cannot be loaded.
pub async fn run(config_path: &Path, output_dir: &Path) -> Result<Vec<WrittenCalendar>, Error> {
    let config = Config::load(config_path)?;
    debug!(
        "Loaded {} calendar definitions from {}",
        config.calendars.len(),
        config_path.display()
    );
    info!("Fetching ICS from {} ...", config.source_url);
    let ics = source_client::get(&config.source_url).await?;
    info!("Fetched ICS, splitting events...");
    let split_calendar = calendar::split(&ics);
    info!(
        "Found {} events in source calendar",
        split_calendar.events.len()
    );
    if let Err(source) = create_dir_all(output_dir) {
        return Err(Error::Write {
            path: output_dir.to_path_buf(),
            source,
        });
    }
    let mut written_calendars = Vec::with_capacity(config.calendars.len());
    for calendar_spec in &config.calendars {
        info!(
            "Building calendar '{}' for keyword '{}'",
            calendar_spec.name, calendar_spec.keyword
        );
        let events = split_calendar
            .events
            .iter()
            .map(String::as_str)
            .filter(|event| event_matches(event, &calendar_spec.keyword))
            .collect::<Vec<&str>>();
        if events.is_empty() {
            info!("No events match keyword '{}'", calendar_spec.keyword);
        }
        written_calendars.push(calendar::write(
            output_dir,
            &calendar_spec.name,
            &split_calendar.header,
            &events,
        )?);
    }
    Ok(written_calendars)
}
