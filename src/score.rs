use crate::config::MAX_SCORE_INCREMENT;

/// Running score plus the decaying per-food award.
///
/// Eating food is worth more the fewer ticks it took to reach: the
/// increment starts at its max, loses 1 per non-food tick (floored at 1),
/// and snaps back to max every time food is eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreTracker {
    pub score: u32,
    pub increment: u32,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            increment: MAX_SCORE_INCREMENT,
        }
    }

    /// Food eaten: bank the current increment and reset it to max.
    pub fn award(&mut self) {
        self.score += self.increment;
        self.increment = MAX_SCORE_INCREMENT;
    }

    /// Non-food tick: the next award shrinks by one, never below 1.
    pub fn decay(&mut self) {
        self.increment = self.increment.saturating_sub(1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MAX_SCORE_INCREMENT;

    use super::ScoreTracker;

    #[test]
    fn award_banks_increment_and_resets_it() {
        let mut tracker = ScoreTracker::new();

        tracker.award();
        assert_eq!(tracker.score, MAX_SCORE_INCREMENT);
        assert_eq!(tracker.increment, MAX_SCORE_INCREMENT);

        tracker.decay();
        tracker.decay();
        tracker.award();
        assert_eq!(tracker.score, MAX_SCORE_INCREMENT * 2 - 2);
        assert_eq!(tracker.increment, MAX_SCORE_INCREMENT);
    }

    #[test]
    fn decay_drops_one_per_tick_and_floors_at_one() {
        let mut tracker = ScoreTracker::new();

        for _ in 0..MAX_SCORE_INCREMENT * 2 {
            tracker.decay();
        }

        assert_eq!(tracker.increment, 1);
        assert_eq!(tracker.score, 0);
    }
}
