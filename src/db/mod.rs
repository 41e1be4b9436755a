//! Database layer for tapstamp.
//!
//! Stamps are stored in a single SQLite table. The file lives in the
//! platform data directory (see [`crate::libs::data_storage`]) unless a
//! path is given explicitly, which is what the tests do.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tapstamp::db::stamps::Stamps;
//! use tapstamp::libs::stamp::Stamp;
//!
//! let mut stamps = Stamps::new()?;
//! stamps.insert(&Stamp::now(), 100)?;
//! for stamp in stamps.fetch()? {
//!     println!("{} {}", stamp.time, stamp.note);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
pub mod db;

/// The capped, newest-first stamp list.
pub mod stamps;
