//! Database layer for the sesh application.
//!
//! Provides type-safe SQLite persistence for all application entities, with
//! a migration system for schema evolution. Each entity gets its own module
//! and opens its own connection through `db::Db`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::db::{tasks::Tasks, users::Users};
//! use sesh::libs::task::{Task, TaskPriority};
//!
//! let mut tasks = Tasks::new()?;
//! let task = Task::new("Review code", "Check PR #123", TaskPriority::High, 1);
//! tasks.insert(&task)?;
//! # anyhow::Ok(())
//! ```

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Session slot storage and mutation operations.
pub mod sessions;

/// Task store backing session assignment.
pub mod tasks;

/// Profile storage with per-profile schedule settings.
pub mod users;
