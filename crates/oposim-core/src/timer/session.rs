//! Exam countdown session.
//!
//! The session is a wall-clock-based state machine. It does not use
//! internal threads; the caller polls `remaining()` (about once per second)
//! to refresh a display.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running <-> Paused
//!    ^          |          |
//!    +----------+----------+   (stop)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = TimerSession::new();
//! timer.start(120)?;
//! // In a loop:
//! println!("{}", format_hms(timer.remaining()));
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::display::{format_hms, Urgency};
use crate::error::InvalidParameter;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Stopped,
    Running,
    Paused,
}

/// One countdown, scoped to a single practice session.
///
/// `end_instant` is only meaningful while running, `remaining_on_pause`
/// only while paused; both are `None` when stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSession {
    state: TimerState,
    #[serde(default)]
    end_instant: Option<DateTime<Utc>>,
    /// Time left at the moment of pausing, whole milliseconds.
    #[serde(default, with = "duration_ms_opt")]
    remaining_on_pause: Option<Duration>,
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSession {
    /// A fresh session in the `Stopped` state.
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            end_instant: None,
            remaining_on_pause: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// True once started and until stopped, including while paused.
    pub fn is_running(&self) -> bool {
        self.state != TimerState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        self.end_instant
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Utc::now())
    }

    /// Time left as seen at `now`. Never negative, never fails.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        match self.state {
            TimerState::Paused => self.remaining_on_pause.unwrap_or_else(Duration::zero),
            TimerState::Running => self
                .end_instant
                .map(|end| clamp_non_negative(end - now))
                .unwrap_or_else(Duration::zero),
            TimerState::Stopped => Duration::zero(),
        }
    }

    pub fn snapshot(&self) -> Event {
        self.snapshot_at(Utc::now())
    }

    /// Build a full state snapshot event.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Event {
        let remaining = self.remaining_at(now);
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: remaining.num_seconds(),
            display: format_hms(remaining),
            urgency: Urgency::classify(remaining.num_seconds()),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, duration_minutes: u32) -> Result<Event, InvalidParameter> {
        self.start_at(duration_minutes, Utc::now())
    }

    /// Begin a countdown of `duration_minutes` from any state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter::NonPositiveDuration`] for a zero duration;
    /// the session is left untouched.
    pub fn start_at(
        &mut self,
        duration_minutes: u32,
        now: DateTime<Utc>,
    ) -> Result<Event, InvalidParameter> {
        if duration_minutes == 0 {
            return Err(InvalidParameter::NonPositiveDuration);
        }
        self.state = TimerState::Running;
        self.end_instant = Some(now + Duration::minutes(i64::from(duration_minutes)));
        self.remaining_on_pause = None;
        tracing::debug!(duration_minutes, "timer started");
        Ok(Event::TimerStarted {
            duration_secs: u64::from(duration_minutes) * 60,
            at: now,
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(Utc::now())
    }

    /// Freeze the countdown. No-op unless running and not already paused.
    pub fn pause_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let remaining = self.remaining_at(now);
        self.state = TimerState::Paused;
        self.remaining_on_pause = Some(remaining);
        self.end_instant = None;
        tracing::debug!(remaining_ms = remaining.num_milliseconds(), "timer paused");
        Some(Event::TimerPaused {
            remaining_ms: remaining.num_milliseconds(),
            at: now,
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.resume_at(Utc::now())
    }

    /// Continue counting down from the paused snapshot.
    /// No-op when not paused or when the snapshot is missing or zero; an
    /// expired countdown stays paused.
    pub fn resume_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        let remaining = self.remaining_on_pause.filter(|d| *d > Duration::zero())?;
        self.remaining_on_pause = None;
        self.state = TimerState::Running;
        self.end_instant = Some(now + remaining);
        tracing::debug!(remaining_ms = remaining.num_milliseconds(), "timer resumed");
        Some(Event::TimerResumed {
            remaining_ms: remaining.num_milliseconds(),
            at: now,
        })
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.stop_at(Utc::now())
    }

    /// Clear everything and return to `Stopped`. Always succeeds; the event
    /// is only produced when there was something to stop.
    pub fn stop_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let was = self.state;
        self.state = TimerState::Stopped;
        self.end_instant = None;
        self.remaining_on_pause = None;
        if was == TimerState::Stopped {
            return None;
        }
        tracing::debug!(from = ?was, "timer stopped");
        Some(Event::TimerStopped { at: now })
    }
}

fn clamp_non_negative(d: Duration) -> Duration {
    if d < Duration::zero() {
        Duration::zero()
    } else {
        d
    }
}

/// Serde adapter storing an optional `chrono::Duration` as milliseconds.
mod duration_ms_opt {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        value.map(|d| d.num_milliseconds()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<i64>::deserialize(d)?.map(Duration::milliseconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn new_session_is_stopped() {
        let timer = TimerSession::new();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert!(!timer.is_running());
        assert!(!timer.is_paused());
        assert_eq!(timer.remaining_at(t0()), Duration::zero());
    }

    #[test]
    fn start_pause_resume() {
        let mut timer = TimerSession::new();
        assert!(timer.start_at(10, t0()).is_ok());
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_at(t0()), Duration::minutes(10));

        let paused_at = t0() + Duration::minutes(3);
        assert!(timer.pause_at(paused_at).is_some());
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.is_running());
        assert_eq!(timer.end_instant(), None);

        // Frozen while paused, however much wall time passes.
        let later = paused_at + Duration::hours(5);
        assert_eq!(timer.remaining_at(paused_at), Duration::minutes(7));
        assert_eq!(timer.remaining_at(later), Duration::minutes(7));

        assert!(timer.resume_at(later).is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_at(later + Duration::minutes(2)), Duration::minutes(5));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut timer = TimerSession::new();
        assert_eq!(
            timer.start_at(0, t0()),
            Err(InvalidParameter::NonPositiveDuration)
        );
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn start_restarts_from_any_state() {
        let mut timer = TimerSession::new();
        timer.start_at(10, t0()).unwrap();
        timer.pause_at(t0() + Duration::minutes(1));
        timer.start_at(5, t0() + Duration::minutes(2)).unwrap();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(
            timer.remaining_at(t0() + Duration::minutes(2)),
            Duration::minutes(5)
        );
    }

    #[test]
    fn pause_and_resume_are_noops_in_wrong_state() {
        let mut timer = TimerSession::new();
        assert!(timer.pause_at(t0()).is_none());
        assert!(timer.resume_at(t0()).is_none());

        timer.start_at(10, t0()).unwrap();
        assert!(timer.resume_at(t0()).is_none());
        assert!(timer.pause_at(t0()).is_some());
        let before = timer.clone();
        assert!(timer.pause_at(t0() + Duration::minutes(1)).is_none());
        assert_eq!(timer, before);
    }

    #[test]
    fn remaining_floors_at_zero() {
        let mut timer = TimerSession::new();
        timer.start_at(1, t0()).unwrap();
        let late = t0() + Duration::minutes(3);
        assert_eq!(timer.remaining_at(late), Duration::zero());
        // Pausing after expiry snapshots zero, not a negative value.
        timer.pause_at(late);
        assert_eq!(timer.remaining_at(late), Duration::zero());
    }

    #[test]
    fn resume_after_expiry_stays_paused() {
        let mut timer = TimerSession::new();
        timer.start_at(1, t0()).unwrap();
        let late = t0() + Duration::minutes(2);
        assert!(timer.pause_at(late).is_some());
        let paused = timer.clone();

        assert!(timer.resume_at(late).is_none());
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer, paused);
        assert_eq!(timer.remaining_at(late), Duration::zero());

        // Stop and start still recover from the expired pause.
        timer.stop_at(late);
        timer.start_at(5, late).unwrap();
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = TimerSession::new();
        timer.start_at(10, t0()).unwrap();
        assert!(timer.stop_at(t0()).is_some());
        let once = timer.clone();
        assert!(timer.stop_at(t0()).is_none());
        assert_eq!(timer, once);
        assert_eq!(timer, TimerSession::new());
        assert_eq!(timer.remaining_at(t0()), Duration::zero());
    }

    #[test]
    fn snapshot_reports_display_and_urgency() {
        let mut timer = TimerSession::new();
        timer.start_at(4, t0()).unwrap();
        match timer.snapshot_at(t0() + Duration::seconds(35)) {
            Event::StateSnapshot {
                state,
                remaining_secs,
                display,
                urgency,
                ..
            } => {
                assert_eq!(state, TimerState::Running);
                assert_eq!(remaining_secs, 205);
                assert_eq!(display, "00:03:25");
                assert_eq!(urgency, Urgency::Warning);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn serde_roundtrip_preserves_paused_snapshot() {
        let mut timer = TimerSession::new();
        timer.start_at(10, t0()).unwrap();
        timer.pause_at(t0() + Duration::milliseconds(1500));
        let json = serde_json::to_string(&timer).unwrap();
        let back: TimerSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timer);
        assert_eq!(
            back.remaining_at(t0()),
            Duration::minutes(10) - Duration::milliseconds(1500)
        );
    }
}
