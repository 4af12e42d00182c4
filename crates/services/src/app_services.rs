use std::path::PathBuf;
use std::sync::Arc;

use study_core::Clock;
use study_core::model::{LearnerProfile, TextMatch};

use crate::assessment_service::AssessmentService;
use crate::document_library::DocumentLibrary;
use crate::error::AppServicesError;
use crate::question_bank::QuestionBank;

pub const DEFAULT_LEARNER_NAME: &str = "Alex Johnson";

/// Knobs resolved by the binary from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub clock: Clock,
    pub text_match: TextMatch,
    pub learner_name: String,
    pub questions_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clock: Clock::default_clock(),
            text_match: TextMatch::default(),
            learner_name: DEFAULT_LEARNER_NAME.to_string(),
            questions_path: None,
        }
    }
}

/// Assembles app-facing services and seed data.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    text_match: TextMatch,
    learner: LearnerProfile,
    question_bank: Arc<QuestionBank>,
    documents: DocumentLibrary,
}

impl AppServices {
    /// Build services from `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the question set cannot be loaded or the
    /// seed data fails validation.
    pub fn new(config: AppConfig) -> Result<Self, AppServicesError> {
        let question_bank = match &config.questions_path {
            Some(path) => QuestionBank::from_json_file(path)?,
            None => QuestionBank::builtin()?,
        };
        let documents = DocumentLibrary::seeded(config.clock)?;

        Ok(Self {
            clock: config.clock,
            text_match: config.text_match,
            learner: sample_learner(config.learner_name),
            question_bank: Arc::new(question_bank),
            documents,
        })
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn learner(&self) -> &LearnerProfile {
        &self.learner
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    /// A fresh, idle assessment manager configured for this app.
    #[must_use]
    pub fn assessment_service(&self) -> AssessmentService {
        AssessmentService::new(self.clock).with_text_match(self.text_match)
    }

    /// The seeded library; callers own their copy.
    #[must_use]
    pub fn document_library(&self) -> DocumentLibrary {
        self.documents.clone()
    }
}

fn sample_learner(name: String) -> LearnerProfile {
    LearnerProfile {
        name,
        level: "Intermediate".to_string(),
        streak_days: 12,
        total_points: 1847,
        completed_courses: 8,
        study_hours: 47,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment_service::AssessmentPhase;
    use study_core::time::fixed_clock;

    #[test]
    fn defaults_use_builtin_bank_and_seeded_library() {
        let services = AppServices::new(AppConfig {
            clock: fixed_clock(),
            ..AppConfig::default()
        })
        .unwrap();

        assert_eq!(services.question_bank().questions().len(), 4);
        assert_eq!(services.document_library().len(), 3);
        assert_eq!(services.learner().name, DEFAULT_LEARNER_NAME);
        assert_eq!(services.assessment_service().phase(), AssessmentPhase::NotStarted);
    }

    #[test]
    fn configured_text_match_is_applied() {
        let services = AppServices::new(AppConfig {
            text_match: TextMatch::Normalized,
            ..AppConfig::default()
        })
        .unwrap();

        assert_eq!(
            services.assessment_service().text_match(),
            TextMatch::Normalized
        );
    }
}
