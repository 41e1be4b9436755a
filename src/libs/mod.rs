//! Core library modules for tapstamp.
//!
//! ## Features
//!
//! - **Formatting**: interval ([`formatter`]) and timestamp ([`timestamp`]) rendering
//! - **Records**: stamps, list intervals and legacy import ([`stamp`])
//! - **Output**: CSV export ([`export`]), terminal tables ([`view`]), messages
//! - **Infrastructure**: configuration and platform data paths
//!
//! ## Usage
//!
//! ```rust
//! use tapstamp::libs::formatter::format_interval;
//! use tapstamp::libs::stamp::{with_intervals, Stamp};
//! use tapstamp::libs::timestamp::Instant;
//!
//! let older = Stamp::new("2025-06-20T14:02:05.000Z".parse::<Instant>().unwrap(), "");
//! let newer = Stamp::new("2025-06-20T14:03:05.500Z".parse::<Instant>().unwrap(), "");
//! let stamps = vec![newer, older];
//!
//! let rows = with_intervals(&stamps);
//! assert_eq!(format_interval(rows[0].interval, true), "1m 0s 500ms");
//! assert_eq!(format_interval(rows[1].interval, true), "");
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod stamp;
pub mod timestamp;
pub mod view;
