//! Contains the daily planning engine: idempotent session generation and
//! the per-slot mutation operations.
//!
//! Generation resolves a profile's schedule settings, runs the slot
//! generator over them and persists the result as one batch. Re-invoking it
//! for a day that is already planned is a safe no-op reporting
//! `created = false`; a lost race against a concurrent call degrades to the
//! same outcome through the storage-level unique index.

use crate::db::sessions::{InsertOutcome, Sessions};
use crate::db::tasks::Tasks;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::schedule;
use crate::libs::session::{DayStatus, Session, SessionStatus};
use crate::libs::task::{Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Outcome of [`ensure_daily_sessions`]: the day's full slot set plus
/// whether this call created it.
#[derive(Debug)]
pub struct DailyPlan {
    pub created: bool,
    pub sessions: Vec<Session>,
}

/// Returns the session set for `(user, date)`, generating it first if the
/// day has not been planned yet.
///
/// Window and slot-size problems surface as configuration errors for the
/// caller to display; they are never retried here.
pub fn ensure_daily_sessions(user_id: i64, date: NaiveDate) -> Result<DailyPlan> {
    let mut sessions = Sessions::new()?;

    // Fast path; the unique index below is the real guarantee
    let existing = sessions.fetch_date(user_id, date)?;
    if !existing.is_empty() {
        return Ok(DailyPlan {
            created: false,
            sessions: existing,
        });
    }

    let user = Users::new()?
        .get_by_id(user_id)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(user_id)))?;

    let slots = schedule::generate_slots(&user.schedule.day_start, &user.schedule.day_end, user.schedule.session_size)?;

    let created = match sessions.insert_batch(user_id, date, &slots)? {
        InsertOutcome::Created => true,
        // A concurrent call committed first; treat exactly like the
        // already-planned fast path
        InsertOutcome::Conflict => false,
    };

    Ok(DailyPlan {
        created,
        sessions: sessions.fetch_date(user_id, date)?,
    })
}

/// Fetches a day's sessions together with the tasks pinned to them.
pub fn sessions_for_date(user_id: i64, date: NaiveDate) -> Result<(Vec<Session>, HashMap<i64, Task>)> {
    let sessions = Sessions::new()?.fetch_date(user_id, date)?;

    let task_ids: Vec<i64> = sessions.iter().filter_map(|s| s.task_id).collect();
    let mut tasks = HashMap::new();
    if !task_ids.is_empty() {
        for task in Tasks::new()?.fetch(TaskFilter::ByIds(task_ids))? {
            if let Some(id) = task.id {
                tasks.insert(id, task);
            }
        }
    }

    Ok((sessions, tasks))
}

/// Overwrites a session's status. Any status may move to any other.
pub fn set_status(session_id: i64, status: SessionStatus) -> Result<Session> {
    Sessions::new()?.set_status(session_id, status)
}

/// Pins a task to a session, or unpins with `None`.
///
/// A non-null task id is verified against the task store first; an unknown
/// id fails the operation and leaves the session untouched.
pub fn assign_task(session_id: i64, task_id: Option<i64>) -> Result<Session> {
    if let Some(id) = task_id {
        Tasks::new()?
            .get_by_id(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id)))?;
    }
    Sessions::new()?.set_task(session_id, task_id)
}

/// Overwrites a session's note; an absent note normalizes to "".
pub fn set_note(session_id: i64, note: Option<String>) -> Result<Session> {
    Sessions::new()?.set_note(session_id, &note.unwrap_or_default())
}

/// Read-only `{date, status}` projection across an inclusive date range,
/// ordered by date ascending.
pub fn sessions_in_range(user_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<DayStatus>> {
    Sessions::new()?.fetch_range(user_id, start_date, end_date)
}
