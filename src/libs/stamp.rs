//! Stamp records and the list views built from them.
//!
//! A stamp is one recorded instant with an optional note. Lists of stamps
//! are always kept newest first; the interval shown for a stamp is the time
//! elapsed since the stamp just below it (the next older one).

use super::messages::Message;
use super::timestamp::Instant;
use crate::msg_warning;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub id: String,
    pub time: Instant,
    #[serde(default)]
    pub note: String,
}

impl Stamp {
    pub fn new(time: Instant, note: &str) -> Self {
        Self {
            id: time.timestamp_millis().to_string(),
            time,
            note: note.to_string(),
        }
    }

    /// Records the current instant.
    pub fn now() -> Self {
        Self::new(Instant::now(), "")
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// A stamp as shown in a list, with its 1-based position and the interval
/// to the next older stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampRow<'a> {
    pub position: usize,
    pub stamp: &'a Stamp,
    pub interval: Option<TimeDelta>,
}

/// Pairs each stamp of a newest-first list with its interval.
///
/// The oldest stamp has no interval. Intervals are absolute, so a clock
/// that went backwards between two stamps still shows the elapsed gap.
pub fn with_intervals(stamps: &[Stamp]) -> Vec<StampRow<'_>> {
    stamps
        .iter()
        .enumerate()
        .map(|(i, stamp)| StampRow {
            position: i + 1,
            stamp,
            interval: stamps
                .get(i + 1)
                .map(|older| TimeDelta::milliseconds(stamp.time.millis_since(&older.time).abs())),
        })
        .collect()
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("legacy data is not a JSON array: {0}")]
    NotAnArray(#[from] serde_json::Error),
    #[error("legacy data contains no usable timestamps")]
    Empty,
}

/// One entry of the legacy storage format: a bare ISO string from the
/// first releases, or an object from later ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyEntry {
    Bare(String),
    Record {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        time: Option<String>,
        #[serde(default)]
        note: Option<String>,
    },
    Other(serde_json::Value),
}

/// Parses the legacy JSON list into stamps, newest first as stored.
///
/// Entries without an id get one derived from their time and position;
/// entries without a parseable time are skipped with a warning.
pub fn parse_legacy(json: &str) -> Result<Vec<Stamp>, ImportError> {
    let entries: Vec<LegacyEntry> = serde_json::from_str(json)?;

    let mut stamps = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let (id, time, note) = match entry {
            LegacyEntry::Bare(time) => (None, Some(time), None),
            LegacyEntry::Record { id, time, note } => (id, time, note),
            LegacyEntry::Other(value) => {
                tracing::debug!(index, %value, "malformed legacy entry");
                msg_warning!(Message::LegacyEntrySkipped(index + 1));
                continue;
            }
        };

        let Some(time) = time.and_then(|raw| raw.parse::<Instant>().ok()) else {
            msg_warning!(Message::LegacyEntrySkipped(index + 1));
            continue;
        };

        let id = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("{}-{}", time.timestamp_millis(), index));

        stamps.push(Stamp {
            id,
            time,
            note: note.unwrap_or_default(),
        });
    }

    if stamps.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(stamps)
}
