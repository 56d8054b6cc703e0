//! One candidate's rehearsal: the drawn topics, the topic chosen to present,
//! and the exam countdown.
//!
//! Any change of context (a new draw, clearing the draw, choosing another
//! topic) stops the countdown, so a timer never outlives the topic it was
//! started for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::timer::TimerSession;
use crate::topics::Topic;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSession {
    #[serde(default)]
    drawn: Vec<Topic>,
    /// Index into `drawn`.
    #[serde(default)]
    selected: Option<usize>,
    #[serde(default)]
    pub timer: TimerSession,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawn(&self) -> &[Topic] {
        &self.drawn
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected.and_then(|i| self.drawn.get(i))
    }

    /// Replace the draw result. Clears the selection and stops the timer.
    pub fn new_draw(&mut self, topics: Vec<Topic>) -> Event {
        let now = Utc::now();
        self.timer.stop_at(now);
        self.selected = None;
        let numbers = topics.iter().map(|t| t.number).collect();
        self.drawn = topics;
        Event::TopicsDrawn { numbers, at: now }
    }

    /// Forget the draw result. Clears the selection and stops the timer.
    pub fn clear(&mut self) -> Event {
        let now = Utc::now();
        self.timer.stop_at(now);
        self.selected = None;
        self.drawn.clear();
        Event::DrawCleared { at: now }
    }

    pub fn select(&mut self, index: usize) -> Result<Option<Event>, ValidationError> {
        self.select_at(index, Utc::now())
    }

    /// Choose the topic to present.
    ///
    /// Choosing a different topic stops the timer; choosing the one already
    /// selected changes nothing and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index` is not a drawn topic.
    pub fn select_at(
        &mut self,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<Option<Event>, ValidationError> {
        let topic = self
            .drawn
            .get(index)
            .ok_or_else(|| ValidationError::OutOfBounds {
                collection: "drawn topics".into(),
                index,
                len: self.drawn.len(),
            })?;
        if self.selected == Some(index) {
            return Ok(None);
        }
        let number = topic.number;
        self.timer.stop_at(now);
        self.selected = Some(index);
        tracing::debug!(index, number, "topic selected");
        Ok(Some(Event::TopicSelected { index, number, at: now }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;
    use crate::topics::generate_default_topics;

    fn drawn_session() -> PracticeSession {
        let mut session = PracticeSession::new();
        session.new_draw(generate_default_topics(3));
        session
    }

    #[test]
    fn new_draw_stops_running_timer() {
        let mut session = drawn_session();
        session.select(1).unwrap();
        session.timer.start(10).unwrap();
        assert_eq!(session.timer.state(), TimerState::Running);

        session.new_draw(generate_default_topics(2));
        assert_eq!(session.timer.state(), TimerState::Stopped);
        assert!(session.selected_topic().is_none());
        assert_eq!(session.drawn().len(), 2);
    }

    #[test]
    fn selecting_another_topic_stops_timer() {
        let mut session = drawn_session();
        session.select(0).unwrap();
        session.timer.start(10).unwrap();

        assert!(session.select(0).unwrap().is_none());
        assert_eq!(session.timer.state(), TimerState::Running);

        assert!(session.select(2).unwrap().is_some());
        assert_eq!(session.timer.state(), TimerState::Stopped);
        assert_eq!(session.selected_topic().map(|t| t.number), Some(3));
    }

    #[test]
    fn select_out_of_bounds() {
        let mut session = drawn_session();
        let err = session.select(3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfBounds {
                collection: "drawn topics".into(),
                index: 3,
                len: 3,
            }
        );
        assert!(session.selected_index().is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = drawn_session();
        session.select(0).unwrap();
        session.timer.start(5).unwrap();
        session.timer.pause();
        session.clear();
        assert_eq!(session, PracticeSession::new());
    }
}
