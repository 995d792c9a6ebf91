//! Profile storage: who owns sessions and which working window they use.
//!
//! A profile plays the identity-provider role for the planner: it resolves
//! an opaque user id to the schedule settings the slot generator runs with.
//! Schedule invariants (window parses, end after start, size 1-60) are
//! enforced on every write so the generator only ever sees sane input.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::schedule;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    day_start TEXT NOT NULL,
    day_end TEXT NOT NULL,
    session_size INTEGER NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_USER: &str = "INSERT INTO users (name, day_start, day_end, session_size) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_SCHEDULE: &str = "UPDATE users SET day_start = ?2, day_end = ?3, session_size = ?4 WHERE id = ?1";
const SELECT_ALL_USERS: &str = "SELECT id, name, day_start, day_end, session_size, created_at FROM users ORDER BY name";
const SELECT_USER_BY_ID: &str = "SELECT id, name, day_start, day_end, session_size, created_at FROM users WHERE id = ?1";
const SELECT_USER_BY_NAME: &str = "SELECT id, name, day_start, day_end, session_size, created_at FROM users WHERE name = ?1";

/// Working window settings owned by a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub day_start: String,
    pub day_end: String,
    pub session_size: u32,
}

impl ScheduleConfig {
    /// Validates the window and slot size invariants.
    pub fn validate(&self) -> Result<()> {
        let start = schedule::to_minutes(&self.day_start).map_err(|e| msg_error_anyhow!(Message::ScheduleWindowInvalid(e.to_string())))?;
        let end = schedule::to_minutes(&self.day_end).map_err(|e| msg_error_anyhow!(Message::ScheduleWindowInvalid(e.to_string())))?;
        if end <= start {
            return Err(msg_error_anyhow!(Message::ScheduleWindowInvalid(
                schedule::ScheduleError::InvalidWindow.to_string()
            )));
        }
        if self.session_size < 1 || self.session_size > 60 {
            return Err(msg_error_anyhow!(Message::SessionSizeOutOfRange(self.session_size)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub schedule: ScheduleConfig,
    pub created_at: Option<String>,
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Migration v1 creates the table, but we ensure here too
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Creates a profile with the given schedule settings.
    pub fn create(&mut self, name: &str, schedule: &ScheduleConfig) -> Result<i64> {
        schedule.validate()?;
        if self.get_by_name(name)?.is_some() {
            return Err(msg_error_anyhow!(Message::UserAlreadyExists(name.to_string())));
        }
        self.conn
            .execute(INSERT_USER, params![name, schedule.day_start, schedule.day_end, schedule.session_size])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replaces a profile's schedule settings.
    ///
    /// Sessions generated under the old settings keep their recorded slot
    /// boundaries; the new window only affects future generation.
    pub fn update_schedule(&mut self, id: i64, schedule: &ScheduleConfig) -> Result<()> {
        schedule.validate()?;
        let affected = self.conn.execute(UPDATE_SCHEDULE, params![id, schedule.day_start, schedule.day_end, schedule.session_size])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::UserNotFound(id)));
        }
        Ok(())
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_NAME, params![name], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list(&mut self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let user_iter = stmt.query_map([], Self::map_row)?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            schedule: ScheduleConfig {
                day_start: row.get(2)?,
                day_end: row.get(3)?,
                session_size: row.get(4)?,
            },
            created_at: row.get(5)?,
        })
    }
}
