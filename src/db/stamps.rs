use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::stamp::Stamp;
use crate::libs::timestamp::Instant;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const SCHEMA_STAMPS: &str = "CREATE TABLE IF NOT EXISTS stamps (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    time TEXT NOT NULL,
    note TEXT NOT NULL DEFAULT ''
)";
const INSERT_STAMP: &str = "INSERT INTO stamps (id, time, note) VALUES (?1, ?2, ?3)";
const SELECT_STAMPS: &str = "SELECT id, time, note FROM stamps ORDER BY seq DESC";
const SELECT_STAMP_AT: &str = "SELECT id, time, note FROM stamps ORDER BY seq DESC LIMIT 1 OFFSET ?1";
const SELECT_ID_EXISTS: &str = "SELECT 1 FROM stamps WHERE id = ?1";
const SELECT_OLDEST_SEQ: &str = "SELECT MIN(seq) FROM stamps";
const INSERT_STAMP_WITH_SEQ: &str = "INSERT INTO stamps (seq, id, time, note) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_NOTE: &str = "UPDATE stamps SET note = ?2 WHERE id = ?1";
const DELETE_STAMP: &str = "DELETE FROM stamps WHERE id = ?1";
const DELETE_ALL: &str = "DELETE FROM stamps";
const COUNT_STAMPS: &str = "SELECT COUNT(*) FROM stamps";
const TRIM_STAMPS: &str = "DELETE FROM stamps WHERE seq NOT IN (SELECT seq FROM stamps ORDER BY seq DESC LIMIT ?1)";

/// Persistent, newest-first list of stamps.
///
/// Order is insertion order: the most recently inserted stamp is first,
/// regardless of the instant it carries. The list is capped; every insert
/// drops whatever falls beyond the limit.
pub struct Stamps {
    conn: Connection,
}

impl Stamps {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_STAMPS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a stamp at the top of the list and trims to `limit`.
    ///
    /// An id that is already taken (two stamps in the same millisecond) is
    /// suffixed with `-N`. Returns the stored stamp and the number of old
    /// stamps dropped.
    pub fn insert(&mut self, stamp: &Stamp, limit: usize) -> Result<(Stamp, usize)> {
        let tx = self.conn.transaction()?;

        let mut stored = stamp.clone();
        let mut suffix = 1;
        while tx.query_row(SELECT_ID_EXISTS, params![stored.id], |_| Ok(())).optional()?.is_some() {
            stored.id = format!("{}-{}", stamp.id, suffix);
            suffix += 1;
        }

        tx.execute(INSERT_STAMP, params![stored.id, stored.time.to_string(), stored.note])?;
        let dropped = tx.execute(TRIM_STAMPS, params![limit as i64])?;
        tx.commit()?;

        tracing::debug!(id = %stored.id, dropped, "stamp inserted");
        Ok((stored, dropped))
    }

    /// Appends older stamps below the existing ones, keeping their order.
    ///
    /// `stamps` is newest first, like everything else. Ids that already
    /// exist are skipped. Returns the number of imported stamps that are
    /// still stored after the trim. Imported rows sit below every existing
    /// row, so the trim removes them before any existing one.
    pub fn import(&mut self, stamps: &[Stamp], limit: usize) -> Result<usize> {
        let tx = self.conn.transaction()?;

        let oldest: Option<i64> = tx.query_row(SELECT_OLDEST_SEQ, [], |row| row.get(0))?;
        let mut seq = oldest.unwrap_or(1);
        let mut added: usize = 0;

        for stamp in stamps {
            if tx.query_row(SELECT_ID_EXISTS, params![stamp.id], |_| Ok(())).optional()?.is_some() {
                tracing::debug!(id = %stamp.id, "skipping duplicate stamp on import");
                continue;
            }
            seq -= 1;
            tx.execute(INSERT_STAMP_WITH_SEQ, params![seq, stamp.id, stamp.time.to_string(), stamp.note])?;
            added += 1;
        }

        let dropped = tx.execute(TRIM_STAMPS, params![limit as i64])?;
        tx.commit()?;

        tracing::debug!(added, dropped, "legacy stamps imported");
        Ok(added.saturating_sub(dropped))
    }

    /// All stamps, newest first.
    pub fn fetch(&mut self) -> Result<Vec<Stamp>> {
        let mut stmt = self.conn.prepare(SELECT_STAMPS)?;
        let stamp_iter = stmt.query_map([], map_stamp)?;

        let mut stamps = Vec::new();
        for stamp in stamp_iter {
            stamps.push(stamp??);
        }
        Ok(stamps)
    }

    /// The stamp at a 1-based list position.
    pub fn get(&mut self, position: usize) -> Result<Option<Stamp>> {
        if position == 0 {
            return Ok(None);
        }
        let stamp = self
            .conn
            .query_row(SELECT_STAMP_AT, params![(position - 1) as i64], map_stamp)
            .optional()?;
        stamp.transpose()
    }

    pub fn update_note(&mut self, id: &str, note: &str) -> Result<()> {
        let affected = self.conn.execute(UPDATE_NOTE, params![id, note])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::StampIdNotFound(id.to_string())));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_STAMP, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::StampIdNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Removes every stamp, returning how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ALL, [])?)
    }

    pub fn count(&mut self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_STAMPS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_stamp(row: &Row) -> rusqlite::Result<Result<Stamp>> {
    let id: String = row.get(0)?;
    let time: String = row.get(1)?;
    let note: String = row.get(2)?;

    Ok(time
        .parse::<Instant>()
        .map(|time| Stamp { id, time, note })
        .map_err(anyhow::Error::from))
}
