//! Display implementation for sesh application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and parameter interpolation stays type-safe. The msg_*
//! macros route these strings either to the console or to the tracing
//! system depending on debug mode.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === USER MESSAGES ===
            Message::UserCreated(name) => format!("Profile '{}' created", name),
            Message::UserScheduleUpdated(name) => format!("Schedule updated for profile '{}'", name),
            Message::UserNotFound(id) => format!("User with ID {} not found", id),
            Message::UserNotFoundByName(name) => format!("Profile '{}' not found", name),
            Message::UserAlreadyExists(name) => format!("Profile '{}' already exists", name),
            Message::NoUsersFound => "No profiles found. Create one with 'sesh user add'".to_string(),
            Message::NoUserSpecified => "No profile specified. Pass --user or set a default with 'sesh init'".to_string(),
            Message::UsersHeader => "Profiles".to_string(),

            // === SCHEDULE CONFIGURATION MESSAGES ===
            Message::SessionSizeOutOfRange(size) => format!("Session size must be between 1 and 60 minutes, got {}", size),
            Message::ScheduleWindowInvalid(reason) => format!("Invalid working window: {}", reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSchedule => "Schedule defaults".to_string(),
            Message::PromptDayStart => "Day start time (HH:MM)".to_string(),
            Message::PromptDayEnd => "Day end time (HH:MM)".to_string(),
            Message::PromptSessionSize => "Session size in minutes (1-60)".to_string(),
            Message::PromptDefaultUser => "Default profile name".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionsCreated(count, date) => format!("Created {} sessions for {}", count, date),
            Message::SessionsAlreadyExist(date) => format!("Sessions for {} already created", date),
            Message::SessionNotFound(id) => format!("Session with ID {} not found", id),
            Message::SessionStatusUpdated(id, status) => format!("Session {} marked as {}", id, status),
            Message::SessionTaskAssigned(session_id, task_id) => format!("Task {} assigned to session {}", task_id, session_id),
            Message::SessionTaskCleared(id) => format!("Task cleared from session {}", id),
            Message::SessionNoteUpdated(id) => format!("Note updated for session {}", id),
            Message::NoSessionsForDate(date) => format!("No sessions found for {}. Generate them with 'sesh plan'", date),
            Message::SessionsHeader(date) => format!("Sessions for {}", date),
            Message::InvalidStatus(status) => format!("Invalid status '{}', expected Pending or Completed", status),

            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksHeader => "Tasks".to_string(),

            // === TREND MESSAGES ===
            Message::TrendHeader(from, to) => format!("Completion trend {} - {}", from, to),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportingData => "Exporting data...".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationApplied(version, name) => format!("Applied migration v{}: {}", version, name),
        };

        write!(f, "{}", message)
    }
}
