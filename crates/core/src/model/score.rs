use serde::{Deserialize, Serialize};

/// Result of scoring a completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    total: u32,
    percent: u8,
}

impl Score {
    /// Build a score from counts. `correct` is clamped to `total`.
    #[must_use]
    pub fn from_counts(correct: u32, total: u32) -> Self {
        let correct = correct.min(total);
        Self {
            correct,
            total,
            percent: round_percent(u64::from(correct), u64::from(total)),
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Wrong plus unanswered questions.
    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whole-number percentage, rounded half up.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_percent(self.percent)
    }
}

/// Coarse grade shown next to results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    #[must_use]
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs work",
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up. Returns 0 when `whole` is 0.
#[must_use]
pub fn round_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(2, 4), 50);
        assert_eq!(round_percent(0, 0), 0);
    }

    #[test]
    fn score_counts_incorrect_as_remainder() {
        let score = Score::from_counts(3, 4);
        assert_eq!(score.percent(), 75);
        assert_eq!(score.incorrect(), 1);
        assert_eq!(score.band(), ScoreBand::NeedsWork);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::for_percent(95), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_percent(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_percent(88), ScoreBand::Good);
        assert_eq!(ScoreBand::for_percent(79), ScoreBand::NeedsWork);
    }
}
