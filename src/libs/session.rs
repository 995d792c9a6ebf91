use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion state of a single session slot.
///
/// Transitions are plain overwrites; any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Pending,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "Pending",
            SessionStatus::Completed => "Completed",
        }
    }

    /// Parses a status supplied by a caller, rejecting unknown values.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Pending" => Ok(SessionStatus::Pending),
            "Completed" => Ok(SessionStatus::Completed),
            _ => Err(msg_error_anyhow!(Message::InvalidStatus(value.to_string()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: SessionStatus,
    pub task_id: Option<i64>,
    pub note: String,
    pub user_id: i64,
}

/// Minimal `{date, status}` projection used by range queries; trend
/// reporting needs nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub status: SessionStatus,
}
