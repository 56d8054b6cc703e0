use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerState, Urgency};

/// Every state change in a practice session produces an Event.
/// Callers that poll the timer get a `StateSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: i64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_ms: i64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        at: DateTime<Utc>,
    },
    TopicsDrawn {
        numbers: Vec<u32>,
        at: DateTime<Utc>,
    },
    TopicSelected {
        index: usize,
        number: u32,
        at: DateTime<Utc>,
    },
    DrawCleared {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_secs: i64,
        display: String,
        urgency: Urgency,
        at: DateTime<Utc>,
    },
}
