//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent across commands and new variants cannot be forgotten.
//! Text follows a few conventions:
//!
//! - Sentence case, no trailing period on one-line status messages
//! - Positions are shown as `#N`, matching the list view
//! - Prompts are phrased as questions or short labels for dialoguer

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === STAMP MESSAGES ===
            Message::StampRecorded(time) => format!("Timestamp recorded: {}", time),
            Message::StampRecordedWithNote(time, note) => format!("Timestamp recorded: {} ({})", time, note),
            Message::NoStamps => "No timestamps recorded yet. Run `tapstamp stamp` to add one.".to_string(),
            Message::StampNotFound(position) => format!("No timestamp at position #{}", position),
            Message::StampIdNotFound(id) => format!("No timestamp with id {}", id),
            Message::StampsHeader(shown, total) => {
                if shown == total {
                    format!("Timestamps ({})", total)
                } else {
                    format!("Timestamps ({} of {})", shown, total)
                }
            }
            Message::RecordsTrimmed(dropped, limit) => {
                format!("Dropped {} oldest timestamp(s) to stay within the limit of {}", dropped, limit)
            }

            Message::LegacyEntrySkipped(entry) => format!("Skipped legacy entry {} without a valid time", entry),

            // === NOTE MESSAGES ===
            Message::PromptNote(time) => format!("Note for {}", time),
            Message::NoteSaved(position) => format!("Note saved for #{}", position),
            Message::NoteCleared(position) => format!("Note cleared for #{}", position),

            // === DELETE / CLEAR MESSAGES ===
            Message::ConfirmDeleteStamp(time) => format!("Are you sure you want to delete this timestamp? {}", time),
            Message::StampDeleted(time) => format!("Timestamp deleted: {}", time),
            Message::ConfirmClearStamps(count) => format!("Clear all timestamps? ({} stored)", count),
            Message::StampsCleared(count) => format!("Cleared {} timestamp(s)", count),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === EXPORT MESSAGES ===
            Message::NothingToExport => "No timestamps to export.".to_string(),
            Message::ExportingStamps(count, destination) => format!("Exporting {} timestamp(s) to {}", count, destination),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === IMPORT MESSAGES ===
            Message::ImportFileReadFailed(path, error) => format!("Failed to read {}: {}", path, error),
            Message::ImportFailed(error) => format!("Import failed: {}", error),
            Message::ImportCompleted(imported, total) => {
                format!("Imported {} timestamp(s), {} stored in total", imported, total)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration: {}", error),
            Message::ConfigCurrent(settings) => format!("Current configuration:\n{}", settings),
            Message::MillisecondsToggled(enabled) => {
                if *enabled {
                    "Milliseconds are now shown in the list".to_string()
                } else {
                    "Milliseconds are now hidden in the list".to_string()
                }
            }
            Message::InvalidMaxRecords => "The record limit must be at least 1".to_string(),
            Message::MaxRecordsReset(limit) => format!("A record limit of 0 is not allowed, using {}", limit),
            Message::PromptIncludeMilliseconds => "Show milliseconds in the list?".to_string(),
            Message::PromptLocale => "Locale for dates (empty to follow the system)".to_string(),
            Message::PromptExportStyle => "Timestamp style in CSV exports".to_string(),
            Message::PromptExportMilliseconds => "Include milliseconds in exported timestamps?".to_string(),
            Message::PromptIntervalMilliseconds => "Include milliseconds in exported intervals?".to_string(),
            Message::PromptMaxRecords => "Maximum number of timestamps to keep".to_string(),
            Message::PromptTraceFormatting => "Trace interval formatting in debug logs?".to_string(),

            // === FORMAT MESSAGES ===
            Message::InvalidTimestamp(error) => format!("Invalid timestamp: {}", error),
            Message::UnknownLocale(tag, fallback) => format!("Unknown locale '{}', using {}", tag, fallback),
        };

        write!(f, "{}", text)
    }
}
