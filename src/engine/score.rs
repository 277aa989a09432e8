//! Engagement score accumulation and upward notification

use serde::{Deserialize, Serialize};

/// Notification emitted to the embedding page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    ScoreUpdated(u64),
    GameOver(u64),
}

/// Receiver of score notifications, called synchronously in hit order
pub trait ScoreSink {
    fn score_updated(&mut self, score: u64);
    fn game_over(&mut self, final_score: u64);
}

/// Queue sink: events are collected and dispatched by the caller later
impl ScoreSink for Vec<ScoreEvent> {
    fn score_updated(&mut self, score: u64) {
        self.push(ScoreEvent::ScoreUpdated(score));
    }

    fn game_over(&mut self, final_score: u64) {
        self.push(ScoreEvent::GameOver(final_score));
    }
}

/// Running score. Only grows, one fixed step per confirmed hit.
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    score: u64,
    points_per_hit: u64,
}

impl ScoreAccumulator {
    pub fn new(points_per_hit: u64) -> Self {
        Self {
            score: 0,
            points_per_hit,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn points_per_hit(&self) -> u64 {
        self.points_per_hit
    }

    /// Zero the score for a new session
    pub fn reset(&mut self, points_per_hit: u64) {
        self.score = 0;
        self.points_per_hit = points_per_hit;
    }

    /// Credit one hit and notify the sink. Returns the new score.
    pub fn record_hit<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) -> u64 {
        self.score = self.score.saturating_add(self.points_per_hit);
        sink.score_updated(self.score);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hits_accumulate_in_order() {
        let mut acc = ScoreAccumulator::new(10);
        let mut events: Vec<ScoreEvent> = Vec::new();
        for _ in 0..3 {
            acc.record_hit(&mut events);
        }
        assert_eq!(acc.score(), 30);
        assert_eq!(
            events,
            vec![
                ScoreEvent::ScoreUpdated(10),
                ScoreEvent::ScoreUpdated(20),
                ScoreEvent::ScoreUpdated(30)
            ]
        );
    }

    #[test]
    fn test_reset_switches_points() {
        let mut acc = ScoreAccumulator::new(10);
        acc.record_hit(&mut Vec::<ScoreEvent>::new());
        acc.reset(20);
        assert_eq!(acc.score(), 0);
        assert_eq!(acc.record_hit(&mut Vec::<ScoreEvent>::new()), 20);
    }

    #[test]
    fn test_saturates() {
        let mut acc = ScoreAccumulator::new(u64::MAX);
        acc.record_hit(&mut Vec::<ScoreEvent>::new());
        assert_eq!(acc.record_hit(&mut Vec::<ScoreEvent>::new()), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_score_is_hits_times_points(hits in 0usize..200, points in 1u64..100) {
            let mut acc = ScoreAccumulator::new(points);
            let mut events: Vec<ScoreEvent> = Vec::new();
            let mut last = 0;
            for _ in 0..hits {
                let s = acc.record_hit(&mut events);
                prop_assert!(s > last);
                last = s;
            }
            prop_assert_eq!(acc.score(), hits as u64 * points);
            prop_assert_eq!(events.len(), hits);
        }
    }
}
