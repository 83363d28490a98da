// --- File: crates/quicktaxi_booking/src/time.rs ---
//! Time slot generation and display formatting.
//!
//! Bookings are made against quarter-hour slots identified by their
//! 24-hour `HH:MM` label. That label is the canonical form: it is what
//! the store persists and what the slot conflict check compares. The
//! 12-hour rendering exists for display only.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// The input was not a `HH:MM` 24-hour label.
    #[error("Invalid time label: {0}")]
    InvalidLabel(String),
}

/// Generates the quarter-hour slot labels of one day, `00:00` through
/// `23:45`, in chronological order. 96 labels in total.
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(96);
    for hour in 0..24 {
        for minute in (0..60).step_by(15) {
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

/// Renders a 24-hour `HH:MM` label in 12-hour clock notation, so
/// `"14:30"` becomes `"02:30 PM"`.
///
/// Midnight renders as `12:xx AM` and noon as `12:xx PM`. Labels that
/// do not parse as a time of day are rejected rather than rendered as
/// nonsense.
pub fn format_time_12h(label: &str) -> Result<String, TimeFormatError> {
    let invalid = || TimeFormatError::InvalidLabel(label.to_string());
    let (hour_part, minute_part) = label.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour_part.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_part.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    Ok(format!("{:02}:{:02} {}", display_hour, minute, suffix))
}
