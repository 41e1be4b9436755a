/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation (`display.rs`); call sites
/// only pick a variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === STAMP MESSAGES ===
    StampRecorded(String),                // formatted time
    StampRecordedWithNote(String, String), // formatted time, note
    NoStamps,
    StampNotFound(usize),   // position
    StampIdNotFound(String), // id
    StampsHeader(usize, usize), // shown, total
    RecordsTrimmed(usize, usize), // dropped, limit
    LegacyEntrySkipped(usize),    // 1-based entry number

    // === NOTE MESSAGES ===
    PromptNote(String), // formatted time
    NoteSaved(usize),   // position
    NoteCleared(usize), // position

    // === DELETE / CLEAR MESSAGES ===
    ConfirmDeleteStamp(String), // formatted time
    StampDeleted(String),       // formatted time
    ConfirmClearStamps(usize),  // count
    StampsCleared(usize),       // count
    OperationCancelled,

    // === EXPORT MESSAGES ===
    NothingToExport,
    ExportingStamps(usize, String), // count, destination
    ExportCompleted(String),        // path

    // === IMPORT MESSAGES ===
    ImportFileReadFailed(String, String), // path, error
    ImportFailed(String),                 // error
    ImportCompleted(usize, usize),        // imported, total stored

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String), // error
    ConfigCurrent(String),    // rendered settings
    MillisecondsToggled(bool),
    InvalidMaxRecords,
    MaxRecordsReset(usize), // default limit
    PromptIncludeMilliseconds,
    PromptLocale,
    PromptExportStyle,
    PromptExportMilliseconds,
    PromptIntervalMilliseconds,
    PromptMaxRecords,
    PromptTraceFormatting,

    // === FORMAT MESSAGES ===
    InvalidTimestamp(String),     // error
    UnknownLocale(String, String), // tag, fallback
}
