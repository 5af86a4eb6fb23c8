//! SQLite output backend (feature `sqlite`).
//!
//! One `output.db` with two tables, `events` and `summaries`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 time_ms    INTEGER NOT NULL,
                 wall       TEXT    NOT NULL,
                 simulation TEXT    NOT NULL,
                 lane       TEXT    NOT NULL,
                 message    TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS summaries (
                 time_ms    INTEGER NOT NULL,
                 simulation TEXT    NOT NULL,
                 status     TEXT    NOT NULL,
                 occupancy  INTEGER NOT NULL,
                 completed  INTEGER NOT NULL,
                 rejected   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (time_ms, wall, simulation, lane, message) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![row.time_ms, row.wall, row.simulation, row.lane, row.message])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO summaries (time_ms, simulation, status, occupancy, completed, rejected) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.time_ms,
                row.simulation,
                row.status,
                row.occupancy,
                row.completed,
                row.rejected,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
