//! Database schema migration management and versioning.
//!
//! Keeps the SQLite schema in step with the application by applying pending
//! migrations inside transactions during database initialization. Applied
//! versions are recorded in a `migrations` table so each change runs exactly
//! once.
//!
//! The uniqueness guarantee for daily session generation lives here: slot
//! rows carry a `UNIQUE (user_id, date, start_time)` index, so a racing
//! duplicate batch insert fails at the storage layer no matter what the
//! check-then-act path saw.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("sesh.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # anyhow::Ok(())
//! ```

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation function.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: base tables and indices
        self.add_migration(1, "create_tables_and_indices", |tx| {
            // Profiles own their schedule settings; times are HH:MM strings
            tx.execute(
                "CREATE TABLE IF NOT EXISTS users (
        id INTEGER NOT NULL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        day_start TEXT NOT NULL,
        day_end TEXT NOT NULL,
        session_size INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        priority TEXT NOT NULL DEFAULT 'Medium',
        user_id INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER NOT NULL PRIMARY KEY,
        date DATE NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'Pending',
        task_id INTEGER,
        note TEXT NOT NULL DEFAULT '',
        user_id INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (task_id) REFERENCES tasks(id)
    )",
                [],
            )?;

            // At most one slot per (profile, date, start); a racing duplicate
            // generation conflicts here and rolls back whole
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_slot ON sessions(user_id, date, start_time)",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user_id)", [])?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all migrations newer than the current schema version.
    ///
    /// Each migration runs in its own transaction together with its history
    /// record, so a failure leaves the database at the previous version.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        let current_version = get_db_version(conn)?;

        for migration in &self.migrations {
            if migration.version <= current_version {
                continue;
            }

            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![migration.version, migration.name])?;
            tx.commit()?;

            msg_debug!(Message::MigrationApplied(migration.version, migration.name.to_string()));
        }

        Ok(())
    }
}

/// Ensures the migrations table exists and applies pending migrations.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    MigrationManager::new().migrate(conn)
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
