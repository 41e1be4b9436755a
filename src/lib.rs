//! # tapstamp
//!
//! Record the current instant with one command, review the intervals
//! between recorded instants, annotate them with notes, and export the log
//! as CSV.
//!
//! ## Features
//!
//! - **Interval Formatting**: `1d 2h 3m 4s 500ms`, with optional rounding to whole seconds
//! - **Timestamp Formatting**: locale-aware display and a sortable export form
//! - **Capped Log**: newest-first list stored in SQLite, 100 entries by default
//! - **Notes**: free-text annotation per entry
//! - **CSV Export**: quoted `Timestamp,Interval,Note` rows
//! - **Legacy Import**: JSON lists of bare timestamps or `{id, time, note}` objects
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tapstamp::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
