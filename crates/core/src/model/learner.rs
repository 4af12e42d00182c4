use serde::{Deserialize, Serialize};

/// Summary of the learner shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub name: String,
    pub level: String,
    pub streak_days: u32,
    pub total_points: u32,
    pub completed_courses: u32,
    pub study_hours: u32,
}

impl LearnerProfile {
    /// First letters of up to two name parts, for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
