//! CSV export of the timestamp log.
//!
//! The export mirrors the list view: one row per stamp, newest first, with
//! the interval to the next older stamp and the note. Every field is quoted
//! and embedded quotes are doubled, so notes containing commas, quotes or
//! line breaks survive a round trip through any spreadsheet.
//!
//! ```text
//! "Timestamp","Interval","Note"
//! "Jun 20, 2025, 2:03:05 PM (123ms)","1m 0s 0ms","after lunch"
//! "Jun 20, 2025, 2:02:05 PM (123ms)","",""
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tapstamp::libs::config::Config;
//! use tapstamp::libs::export::{ExportOptions, Exporter};
//!
//! let config = Config::read()?;
//! let exporter = Exporter::new(ExportOptions::from_config(&config), None);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{
        config::{Config, TimestampStyle},
        formatter::{FormatTrace, IntervalFormatter, Silent},
        messages::Message,
        stamp::{self, Stamp},
        timestamp,
    },
    msg_bail_anyhow,
};
use anyhow::Result;
use chrono::{Local, TimeZone};
use csv::{QuoteStyle, WriterBuilder};
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name used when no output path is given.
pub const DEFAULT_EXPORT_FILE: &str = "timestamps.csv";

pub const CSV_HEADER: [&str; 3] = ["Timestamp", "Interval", "Note"];

/// Rendering choices for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub style: TimestampStyle,
    /// Milliseconds in the timestamp column.
    pub include_milliseconds: bool,
    /// Milliseconds in the interval column.
    pub interval_milliseconds: bool,
    pub locale: String,
}

impl ExportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            style: config.export.style,
            include_milliseconds: config.export.include_milliseconds,
            interval_milliseconds: config.export.interval_milliseconds,
            locale: config.locale(),
        }
    }
}

/// Writes stamp lists as CSV.
///
/// The time zone and the interval observer are type parameters so tests
/// can pin the zone and the CLI can turn tracing on; by default it is local
/// time with a silent observer.
pub struct Exporter<Tz: TimeZone = Local, T: FormatTrace = Silent> {
    options: ExportOptions,
    output_path: PathBuf,
    tz: Tz,
    intervals: IntervalFormatter<T>,
}

impl Exporter<Local, Silent> {
    pub fn new(options: ExportOptions, output_path: Option<PathBuf>) -> Self {
        let intervals = IntervalFormatter::new(options.interval_milliseconds);
        Self {
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
            options,
            tz: Local,
            intervals,
        }
    }
}

impl<Tz, T> Exporter<Tz, T>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    T: FormatTrace,
{
    /// Renders timestamps in `tz` instead of local time.
    pub fn in_zone<Z: TimeZone>(self, tz: Z) -> Exporter<Z, T> {
        Exporter {
            options: self.options,
            output_path: self.output_path,
            tz,
            intervals: self.intervals,
        }
    }

    /// Uses `tracer` to observe interval formatting.
    pub fn with_tracer<U: FormatTrace>(self, tracer: U) -> Exporter<Tz, U> {
        Exporter {
            intervals: IntervalFormatter::with_tracer(self.options.interval_milliseconds, tracer),
            options: self.options,
            output_path: self.output_path,
            tz: self.tz,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `stamps` (newest first) to the output file.
    ///
    /// An empty list is an error and leaves the file system untouched.
    pub fn write(&self, stamps: &[Stamp]) -> Result<()> {
        if stamps.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }
        let file = std::fs::File::create(&self.output_path)?;
        self.write_to(file, stamps)?;
        tracing::debug!(path = %self.output_path.display(), rows = stamps.len(), "csv export written");
        Ok(())
    }

    /// Renders `stamps` to a CSV string.
    pub fn render(&self, stamps: &[Stamp]) -> Result<String> {
        if stamps.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, stamps)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn write_to<W: Write>(&self, writer: W, stamps: &[Stamp]) -> Result<()> {
        let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(writer);
        wtr.write_record(CSV_HEADER)?;

        for row in stamp::with_intervals(stamps) {
            wtr.write_record([self.timestamp(&row.stamp.time), self.intervals.format(row.interval), row.stamp.note.clone()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn timestamp(&self, instant: &timestamp::Instant) -> String {
        match self.options.style {
            TimestampStyle::Display => {
                timestamp::format_display_in(instant, &self.tz, self.options.include_milliseconds, &self.options.locale)
            }
            TimestampStyle::Sortable => timestamp::format_export_in(instant, &self.tz, self.options.include_milliseconds),
        }
    }
}
