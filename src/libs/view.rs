use super::formatter::{FormatTrace, IntervalFormatter};
use super::stamp::{self, Stamp};
use super::timestamp::format_display;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the list table: position, timestamp, interval to the next
    /// older stamp, and note.
    pub fn stamps<T: FormatTrace>(stamps: &[Stamp], intervals: &IntervalFormatter<T>, locale: &str) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["#", "TIMESTAMP", "INTERVAL", "NOTE"]);
        for entry in stamp::with_intervals(stamps) {
            table.add_row(row![
                r->entry.position,
                format_display(&entry.stamp.time, intervals.include_milliseconds(), locale),
                r->intervals.format(entry.interval),
                entry.stamp.note
            ]);
        }
        table
    }
}
