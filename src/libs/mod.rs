//! Core library modules for the sesh application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sesh::libs::schedule;
//!
//! let slots = schedule::generate_slots("09:00", "17:00", 15)?;
//! assert_eq!(slots.len(), 32);
//! # Ok::<(), sesh::libs::schedule::ScheduleError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod planner;
pub mod schedule;
pub mod session;
pub mod task;
pub mod trend;
pub mod view;
