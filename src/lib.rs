//! # Sesh - Session Scheduler
//!
//! A command-line utility for partitioning a working day into fixed-length
//! focus sessions, assigning tasks to them, and tracking completion trends.
//!
//! ## Features
//!
//! - **Daily Planning**: Deterministic slot generation from a configured working window
//! - **Idempotent Generation**: Re-planning a day is a safe no-op, never a duplicate
//! - **Task Pinning**: Assign one task per slot, reassign or clear at any time
//! - **Completion Tracking**: Mark slots Pending or Completed, attach notes
//! - **Trend Reports**: Per-day completion rates over any date range
//! - **Data Export**: Export plans and trends to CSV, JSON, and Excel formats
//! - **Profiles**: Each profile owns its working window and session size
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
