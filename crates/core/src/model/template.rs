use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{ScoreBand, TemplateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Mixed => "Mixed",
        };
        f.write_str(label)
    }
}

/// A catalogue entry the learner can start an assessment from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentTemplate {
    pub id: TemplateId,
    pub title: String,
    pub subject: String,
    /// Advertised length; the started session uses the bank's question set.
    pub question_count: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

/// A past attempt shown in the "recent results" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResult {
    pub subject: String,
    pub percent: u8,
    pub taken_on: NaiveDate,
    pub question_count: u32,
}

impl RecentResult {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_percent(self.percent)
    }
}
