use services::{DocumentLibrary, QuestionBank};
use study_core::model::LearnerProfile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub greeting: String,
    pub level_label: String,
    pub stats: Vec<StatVm>,
    pub library_label: String,
    pub catalogue_label: String,
}

#[must_use]
pub fn map_dashboard(
    learner: &LearnerProfile,
    bank: &QuestionBank,
    library: &DocumentLibrary,
) -> DashboardVm {
    let stat = |label, value: String| StatVm { label, value };

    DashboardVm {
        greeting: format!("Welcome back, {}!", learner.name),
        level_label: format!("{} learner", learner.level),
        stats: vec![
            stat("Study streak", format!("{} days", learner.streak_days)),
            stat("Total points", learner.total_points.to_string()),
            stat("Courses completed", learner.completed_courses.to_string()),
            stat("Study time", format!("{}h", learner.study_hours)),
        ],
        library_label: format!(
            "{} documents, {} processed",
            library.len(),
            library.processed_count()
        ),
        catalogue_label: format!("{} assessments available", bank.templates().len()),
    }
}
