//! Rendering helpers for the countdown display.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default width of the warning band: the last five minutes.
pub const WARNING_THRESHOLD_SECS: i64 = 300;

/// Render a duration as zero-padded `HH:MM:SS`.
///
/// Truncates to whole seconds. Hours keep counting past 24; negative
/// durations render as `00:00:00`.
pub fn format_hms(duration: Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// How urgently the remaining time should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Expired,
}

impl Urgency {
    /// `<= 0` expired, `(0, 300]` warning, otherwise normal.
    pub fn classify(remaining_secs: i64) -> Self {
        Self::classify_with_threshold(remaining_secs, WARNING_THRESHOLD_SECS)
    }

    pub fn classify_with_threshold(remaining_secs: i64, warning_secs: i64) -> Self {
        if remaining_secs <= 0 {
            Urgency::Expired
        } else if remaining_secs <= warning_secs {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Normal => "TIME REMAINING",
            Urgency::Warning => "LAST MINUTES!",
            Urgency::Expired => "TIME'S UP!",
        }
    }
}
