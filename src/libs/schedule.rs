//! Time arithmetic and slot generation for daily session planning.
//!
//! Everything in this module is pure: the slot sequence for a day is fully
//! determined by the window boundaries and the session size. Persistence and
//! user lookups live in the `db` layer.

use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time format '{0}', expected HH:MM")]
    Format(String),
    #[error("day end time must be after day start time")]
    InvalidWindow,
    #[error("no sessions fit the configured window")]
    EmptyWindow,
}

/// Boundaries of a single generated slot, both in `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start_time: String,
    pub end_time: String,
}

/// Parses an `HH:MM` string into minutes since midnight.
///
/// Both fields must be zero-padded two-digit numbers; hours 00-23 and
/// minutes 00-59.
pub fn to_minutes(time: &str) -> Result<u32, ScheduleError> {
    let err = || ScheduleError::Format(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(err)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(err());
    }

    let hours: u32 = hours.parse().map_err(|_| err())?;
    let minutes: u32 = minutes.parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Formats minutes since midnight back into an `HH:MM` string.
///
/// The hours component is not wrapped modulo 24; callers keep the value
/// inside a single day.
pub fn to_time_string(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// Partitions a daily working window into consecutive fixed-length slots.
///
/// Produces `floor((end - start) / size)` contiguous slots starting at
/// `start_time`. Remainder minutes at the end of the window smaller than one
/// full slot are dropped rather than emitted as a partial slot.
pub fn generate_slots(start_time: &str, end_time: &str, session_size: u32) -> Result<Vec<Slot>, ScheduleError> {
    let start_minutes = to_minutes(start_time)?;
    let end_minutes = to_minutes(end_time)?;

    if end_minutes <= start_minutes {
        return Err(ScheduleError::InvalidWindow);
    }

    let total_duration = end_minutes - start_minutes;
    let slot_count = if session_size > 0 { total_duration / session_size } else { 0 };
    if slot_count == 0 {
        return Err(ScheduleError::EmptyWindow);
    }

    let mut slots = Vec::with_capacity(slot_count as usize);
    let mut current_start = start_minutes;

    for _ in 0..slot_count {
        slots.push(Slot {
            start_time: to_time_string(current_start),
            end_time: to_time_string(current_start + session_size),
        });
        current_start += session_size;
    }

    Ok(slots)
}
