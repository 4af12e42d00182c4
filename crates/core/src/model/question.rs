use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::{Answer, QuestionId, TextMatch};

//
// ─── KINDS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FreeText,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestionKind::MultipleChoice => "Multiple choice",
            QuestionKind::TrueFalse => "True / False",
            QuestionKind::FreeText => "Short answer",
        };
        f.write_str(label)
    }
}

/// Kind-specific part of a question: the choices (if any) and the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionBody {
    MultipleChoice { choices: Vec<String>, correct: usize },
    TrueFalse { correct: bool },
    FreeText { correct: String },
}

impl QuestionBody {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
            QuestionBody::FreeText { .. } => QuestionKind::FreeText,
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question, as authored in code or loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(flatten)]
    pub body: QuestionBody,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, a multiple-choice
    /// question has no (or blank) choices or its correct index is out of range,
    /// or a free-text question expects blank text.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt { id: self.id });
        }

        match &self.body {
            QuestionBody::MultipleChoice { choices, correct } => {
                if choices.is_empty() {
                    return Err(QuestionError::NoChoices { id: self.id });
                }
                if let Some(index) = choices.iter().position(|c| c.trim().is_empty()) {
                    return Err(QuestionError::EmptyChoice { id: self.id, index });
                }
                if *correct >= choices.len() {
                    return Err(QuestionError::CorrectChoiceOutOfRange {
                        id: self.id,
                        correct: *correct,
                        len: choices.len(),
                    });
                }
            }
            QuestionBody::TrueFalse { .. } => {}
            QuestionBody::FreeText { correct } => {
                if correct.trim().is_empty() {
                    return Err(QuestionError::EmptyExpectedText { id: self.id });
                }
            }
        }

        Ok(Question {
            id: self.id,
            prompt: prompt.to_string(),
            body: self.body,
            explanation: self.explanation.trim().to_string(),
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    #[serde(flatten)]
    body: QuestionBody,
    explanation: String,
}

impl Question {
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn multiple_choice(
        id: QuestionId,
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            id,
            prompt: prompt.into(),
            body: QuestionBody::MultipleChoice {
                choices: choices.into_iter().map(Into::into).collect(),
                correct,
            },
            explanation: explanation.into(),
        }
        .validate()
    }

    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn true_false(
        id: QuestionId,
        prompt: impl Into<String>,
        correct: bool,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            id,
            prompt: prompt.into(),
            body: QuestionBody::TrueFalse { correct },
            explanation: explanation.into(),
        }
        .validate()
    }

    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn free_text(
        id: QuestionId,
        prompt: impl Into<String>,
        correct: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            id,
            prompt: prompt.into(),
            body: QuestionBody::FreeText {
                correct: correct.into(),
            },
            explanation: explanation.into(),
        }
        .validate()
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    #[must_use]
    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    /// Choice strings; empty unless the question is multiple-choice.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        match &self.body {
            QuestionBody::MultipleChoice { choices, .. } => choices,
            _ => &[],
        }
    }

    #[must_use]
    pub fn expected_answer(&self) -> Answer {
        match &self.body {
            QuestionBody::MultipleChoice { correct, .. } => Answer::Choice(*correct),
            QuestionBody::TrueFalse { correct } => Answer::Boolean(*correct),
            QuestionBody::FreeText { correct } => Answer::Text(correct.clone()),
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, answer: &Answer, text_match: TextMatch) -> bool {
        answer.matches(&self.expected_answer(), text_match)
    }
}

/// Validate a list of drafts into a question set with unique ids.
///
/// # Errors
///
/// Returns the first `QuestionError` encountered, including
/// `QuestionError::DuplicateId` when two drafts share an id.
pub fn validate_question_set(
    drafts: impl IntoIterator<Item = QuestionDraft>,
) -> Result<Vec<Question>, QuestionError> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .map(|draft| {
            if !seen.insert(draft.id) {
                return Err(QuestionError::DuplicateId { id: draft.id });
            }
            draft.validate()
        })
        .collect()
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: prompt is empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: multiple-choice question has no choices")]
    NoChoices { id: QuestionId },

    #[error("question {id}: choice {index} is empty")]
    EmptyChoice { id: QuestionId, index: usize },

    #[error("question {id}: correct choice {correct} is out of range for {len} choices")]
    CorrectChoiceOutOfRange {
        id: QuestionId,
        correct: usize,
        len: usize,
    },

    #[error("question {id}: expected answer text is empty")]
    EmptyExpectedText { id: QuestionId },

    #[error("question {id} appears more than once")]
    DuplicateId { id: QuestionId },
}
