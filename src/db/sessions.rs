//! Session slot storage: batch creation, point mutations, range queries.
//!
//! A session row is one fixed-length block of a profile's working day. Rows
//! are created in bulk when a day is planned and mutated one at a time
//! afterwards (status, pinned task, note). The `UNIQUE (user_id, date,
//! start_time)` index is the authoritative duplicate-generation guard: the
//! batch insert runs inside a transaction, so two racing generation calls
//! for the same profile and date can never both commit — the loser observes
//! a constraint conflict and is reported as [`InsertOutcome::Conflict`].

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::schedule::Slot;
use crate::libs::session::{DayStatus, Session, SessionStatus};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER NOT NULL PRIMARY KEY,
    date DATE NOT NULL,
    start_time TEXT NOT NULL,
    end_time TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Pending',
    task_id INTEGER,
    note TEXT NOT NULL DEFAULT '',
    user_id INTEGER NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (user_id, date, start_time)
)";
const INSERT_SESSION: &str = "INSERT INTO sessions (date, start_time, end_time, status, task_id, note, user_id)
    VALUES (?1, ?2, ?3, 'Pending', NULL, '', ?4)";
const SELECT_BY_DATE: &str = "SELECT id, date, start_time, end_time, status, task_id, note, user_id FROM sessions
    WHERE user_id = ?1 AND date = ?2 ORDER BY start_time";
const SELECT_BY_ID: &str = "SELECT id, date, start_time, end_time, status, task_id, note, user_id FROM sessions WHERE id = ?1";
const SELECT_RANGE: &str = "SELECT date, status FROM sessions WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date";
const UPDATE_STATUS: &str = "UPDATE sessions SET status = ?2 WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE sessions SET task_id = ?2 WHERE id = ?1";
const UPDATE_NOTE: &str = "UPDATE sessions SET note = ?2 WHERE id = ?1";

/// Result of a daily batch insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The whole batch was committed.
    Created,
    /// Another batch for the same profile and date already holds the
    /// unique index; nothing was written.
    Conflict,
}

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Migration v1 creates the table, but we ensure here too
        db.conn.execute(SCHEMA_SESSIONS, [])?;
        Ok(Sessions { conn: db.conn })
    }

    /// Persists a generated day of slots in a single transaction.
    ///
    /// Every row starts as Pending with no task and an empty note. A unique
    /// index conflict means a concurrent call won the race; the transaction
    /// rolls back and the caller falls back to reading the existing set.
    pub fn insert_batch(&mut self, user_id: i64, date: NaiveDate, slots: &[Slot]) -> Result<InsertOutcome> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let tx = self.conn.transaction()?;

        for slot in slots {
            match tx.execute(INSERT_SESSION, params![date_str, slot.start_time, slot.end_time, user_id]) {
                Ok(_) => {}
                Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                    return Ok(InsertOutcome::Conflict);
                }
                Err(e) => return Err(e.into()),
            }
        }

        tx.commit()?;
        Ok(InsertOutcome::Created)
    }

    /// Fetches all slots of one profile for one date, ordered by start time.
    pub fn fetch_date(&mut self, user_id: i64, date: NaiveDate) -> Result<Vec<Session>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_BY_DATE)?;
        let session_iter = stmt.query_map(params![user_id, date_str], Self::map_row)?;

        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }
        Ok(sessions)
    }

    /// Fetches the `{date, status}` projection across an inclusive date
    /// range, ordered by date ascending. Full calendar days on both
    /// boundaries; never mutates.
    pub fn fetch_range(&mut self, user_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<DayStatus>> {
        let start_str = start_date.format("%Y-%m-%d").to_string();
        let end_str = end_date.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_RANGE)?;
        let status_iter = stmt.query_map(params![user_id, start_str, end_str], |row| {
            Ok(DayStatus {
                date: NaiveDate::parse_from_str(&row.get::<_, String>(0)?, "%Y-%m-%d").unwrap(),
                status: SessionStatus::parse(&row.get::<_, String>(1)?).unwrap(),
            })
        })?;

        let mut statuses = Vec::new();
        for status in status_iter {
            statuses.push(status?);
        }
        Ok(statuses)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Session>> {
        self.conn
            .query_row(SELECT_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Overwrites the status of a single slot and returns the updated row.
    pub fn set_status(&mut self, id: i64, status: SessionStatus) -> Result<Session> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status.as_str()])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::SessionNotFound(id)));
        }
        self.require(id)
    }

    /// Overwrites the pinned task of a single slot; `None` unpins.
    ///
    /// Task existence is checked by the planner before this runs; the
    /// storage layer only records the reference.
    pub fn set_task(&mut self, id: i64, task_id: Option<i64>) -> Result<Session> {
        let affected = self.conn.execute(UPDATE_TASK, params![id, task_id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::SessionNotFound(id)));
        }
        self.require(id)
    }

    /// Overwrites the free-text note of a single slot.
    pub fn set_note(&mut self, id: i64, note: &str) -> Result<Session> {
        let affected = self.conn.execute(UPDATE_NOTE, params![id, note])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::SessionNotFound(id)));
        }
        self.require(id)
    }

    fn require(&mut self, id: i64) -> Result<Session> {
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::SessionNotFound(id)))
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Session> {
        Ok(Session {
            id: row.get(0)?,
            date: NaiveDate::parse_from_str(&row.get::<_, String>(1)?, "%Y-%m-%d").unwrap(),
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            status: SessionStatus::parse(&row.get::<_, String>(4)?).unwrap(),
            task_id: row.get(5)?,
            note: row.get(6)?,
            user_id: row.get(7)?,
        })
    }
}
