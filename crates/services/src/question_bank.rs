use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use study_core::model::{
    AssessmentTemplate, Difficulty, Question, QuestionDraft, QuestionError, QuestionId,
    RecentResult, TemplateId, validate_question_set,
};

use crate::error::QuestionSetError;

/// Question set, assessment catalogue and recent results offered to the learner.
///
/// Every catalogue template draws from the same question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    templates: Vec<AssessmentTemplate>,
    recent_results: Vec<RecentResult>,
}

impl QuestionBank {
    /// The built-in sample questions with the default catalogue.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a built-in question fails validation.
    pub fn builtin() -> Result<Self, QuestionError> {
        Ok(Self::with_questions(sample_questions()?))
    }

    /// A bank over `questions` with the default catalogue.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            templates: default_templates(),
            recent_results: default_recent_results(),
        }
    }

    /// Parse a JSON array of question drafts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Json` for malformed input, `QuestionSetError::Empty`
    /// for an empty array and `QuestionSetError::Question` for invalid drafts.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionSetError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        if drafts.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        let questions = validate_question_set(drafts)?;
        Ok(Self::with_questions(questions))
    }

    /// Load a JSON question set from disk.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Read` if the file cannot be read, otherwise
    /// the errors of [`QuestionBank::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, QuestionSetError> {
        let json = std::fs::read_to_string(path).map_err(|source| QuestionSetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json_str(&json)?;
        info!(path = %path.display(), questions = bank.questions.len(), "loaded question set");
        Ok(bank)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn templates(&self) -> &[AssessmentTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn template(&self, id: TemplateId) -> Option<&AssessmentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Questions used when starting `id`, or `None` for an unknown template.
    #[must_use]
    pub fn questions_for(&self, id: TemplateId) -> Option<&[Question]> {
        self.template(id).map(|_| self.questions.as_slice())
    }

    #[must_use]
    pub fn recent_results(&self) -> &[RecentResult] {
        &self.recent_results
    }
}

fn sample_questions() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::multiple_choice(
            QuestionId::new(1),
            "What is the derivative of x² + 3x + 2?",
            ["2x + 3", "2x + 2", "x + 3", "2x"],
            0,
            "Using the power rule: d/dx(x²) = 2x, d/dx(3x) = 3, d/dx(2) = 0, so the answer is 2x + 3.",
        )?,
        Question::true_false(
            QuestionId::new(2),
            "The speed of light in vacuum is approximately 3 × 10⁸ m/s.",
            true,
            "The speed of light in vacuum is exactly 299,792,458 m/s, which is approximately 3 × 10⁸ m/s.",
        )?,
        Question::multiple_choice(
            QuestionId::new(3),
            "Which of the following is an organic compound?",
            ["H₂O", "NaCl", "CH₄", "CO₂"],
            2,
            "CH₄ (methane) is an organic compound as it contains carbon-hydrogen bonds.",
        )?,
        Question::free_text(
            QuestionId::new(4),
            "What is the capital of France?",
            "Paris",
            "Paris is the capital and largest city of France.",
        )?,
    ])
}

fn default_templates() -> Vec<AssessmentTemplate> {
    let template = |id, title: &str, subject: &str, question_count, duration_minutes, difficulty| {
        AssessmentTemplate {
            id: TemplateId::new(id),
            title: title.to_string(),
            subject: subject.to_string(),
            question_count,
            duration_minutes,
            difficulty,
        }
    };

    vec![
        template(1, "Mathematics Assessment", "Mathematics", 15, 30, Difficulty::Intermediate),
        template(2, "Physics Quiz", "Physics", 20, 45, Difficulty::Advanced),
        template(3, "Chemistry Basics", "Chemistry", 12, 25, Difficulty::Beginner),
        template(4, "Quick Review", "Mixed", 10, 15, Difficulty::Mixed),
    ]
}

fn default_recent_results() -> Vec<RecentResult> {
    [
        ("Mathematics", 92, 15, 15),
        ("Physics", 88, 14, 20),
        ("Chemistry", 95, 13, 12),
    ]
    .into_iter()
    .filter_map(|(subject, percent, day, question_count)| {
        Some(RecentResult {
            subject: subject.to_string(),
            percent,
            taken_on: NaiveDate::from_ymd_opt(2024, 1, day)?,
            question_count,
        })
    })
    .collect()
}
