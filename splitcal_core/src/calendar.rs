//! This module splits an iCalendar document into events and assembles filtered calendars from them.
//!
//! Events are kept as raw text, so every written event is byte-identical to its source block.

use std::{
    fs::write as write_file,
    path::{Path, PathBuf},
};

use log::info;

use crate::error::Error;

static EVENT_BEGIN: &str = "BEGIN:VEVENT";
static EVENT_END: &str = "END:VEVENT";
static CALENDAR_END: &str = "END:VCALENDAR";
static EXTENSION: &str = "ics";

/// The fields the keyword is searched in.
static MATCHED_FIELDS: [&str; 3] = ["SUMMARY", "DESCRIPTION", "LOCATION"];

/// A source calendar taken apart into its header and its events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitCalendar {
    /// every line outside of an event, in source order
    pub header: Vec<String>,
    /// the event blocks with their lines joined by `\n`, in source order
    pub events: Vec<String>,
}

/// What was written for a single derived calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenCalendar {
    pub path: PathBuf,
    pub event_count: usize,
}

/// Split raw iCalendar text into its header and its event blocks.
///
/// An event is only emitted once its end marker is seen. An event which is never closed is dropped,
/// and a begin marker inside an open event starts that event over.
pub fn split(ics: &str) -> SplitCalendar {
    let mut split_calendar = SplitCalendar::default();
    let mut event_lines: Option<Vec<&str>> = None;
    for line in ics.lines() {
        if line.starts_with(EVENT_BEGIN) {
            event_lines = Some(vec![line]);
            continue;
        }
        match event_lines.as_mut() {
            Some(lines) if line.starts_with(EVENT_END) => {
                lines.push(line);
                split_calendar.events.push(lines.join("\n"));
                event_lines = None;
            }
            Some(lines) => lines.push(line),
            None => split_calendar.header.push(line.to_string()),
        }
    }
    split_calendar
}

/// Check whether the keyword occurs in the summary, description or location of an event.
///
/// Both the keyword and the event text are compared case-insensitively.
pub fn event_matches(event: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    event.lines().any(|line| {
        let upper = line.to_uppercase();
        MATCHED_FIELDS.iter().any(|field| upper.starts_with(field))
            && line.to_lowercase().contains(&keyword)
    })
}

/// Assemble a calendar from the source header and a selection of events.
pub fn render(header: &[String], events: &[&str]) -> String {
    let header = header
        .iter()
        .filter(|line| line.trim().to_uppercase() != CALENDAR_END)
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join("\n");
    format!("{header}\n{}\n{CALENDAR_END}\n", events.join("\n"))
}

/// Write a derived calendar to `<output_dir>/<name>.ics`, replacing any previous file.
pub fn write(
    output_dir: &Path,
    name: &str,
    header: &[String],
    events: &[&str],
) -> Result<WrittenCalendar, Error> {
    let path = output_dir.join(format!("{name}.{EXTENSION}"));
    if let Err(source) = write_file(&path, render(header, events)) {
        return Err(Error::Write { path, source });
    }
    info!("Wrote {} with {} events", path.display(), events.len());
    Ok(WrittenCalendar {
        path,
        event_count: events.len(),
    })
}
