use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::score::round_percent;
use crate::model::{Answer, Question, QuestionId, Score, TextMatch};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("assessment has no questions")]
    Empty,

    #[error("position {position} is outside the assessment (0..{len})")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("question at position {position} has not been answered")]
    Unanswered { position: usize },

    #[error("assessment already completed")]
    Completed,
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved { position: usize },
    Completed(Score),
}

/// Per-question review row for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub position: usize,
    pub question_id: QuestionId,
    pub submitted: Option<Answer>,
    pub expected: Answer,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Completion {
    score: Score,
    completed_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a fixed question sequence.
///
/// The session owns a snapshot of its questions, so later edits to the source
/// question bank never reach an attempt in progress. Answers are keyed by
/// position and may be sparse until the session is completed. While the
/// session is in progress the cursor stays within `0..len`; advancing from the
/// last position completes the session instead of moving past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSession {
    questions: Vec<Question>,
    answers: BTreeMap<usize, Answer>,
    position: usize,
    text_match: TextMatch,
    started_at: DateTime<Utc>,
    completion: Option<Completion>,
}

impl AssessmentSession {
    /// Start a session over a copy of `questions`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start(
        questions: &[Question],
        text_match: TextMatch,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions: questions.to_vec(),
            answers: BTreeMap::new(),
            position: 0,
            text_match,
            started_at: now,
            completion: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: a session cannot be started without questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.position]
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, Answer> {
        &self.answers
    }

    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<&Answer> {
        self.answers.get(&position)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answer_at(self.position)
    }

    #[must_use]
    pub fn text_match(&self) -> TextMatch {
        self.text_match
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion.map(|c| c.completed_at)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// The score, once the session is complete.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.completion.map(|c| c.score)
    }

    /// Share of the sequence reached, counting the current question.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        round_percent(self.position as u64 + 1, self.questions.len() as u64)
    }

    /// Record `answer` at `position`, replacing any earlier answer there.
    ///
    /// Any in-range position may be (re)answered while the session is in progress.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after completion and
    /// `SessionError::PositionOutOfRange` for positions outside `0..len`.
    pub fn submit_answer(&mut self, position: usize, answer: Answer) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if position >= self.questions.len() {
            return Err(SessionError::PositionOutOfRange {
                position,
                len: self.questions.len(),
            });
        }

        self.answers.insert(position, answer);
        Ok(())
    }

    /// Move to the next question, or complete the session from the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after completion and
    /// `SessionError::Unanswered` when the current position has no answer.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if !self.answers.contains_key(&self.position) {
            return Err(SessionError::Unanswered {
                position: self.position,
            });
        }

        if self.is_last() {
            return Ok(Advance::Completed(self.complete(now)));
        }

        self.position += 1;
        Ok(Advance::Moved {
            position: self.position,
        })
    }

    /// Score the session and mark it complete.
    ///
    /// Unanswered positions count as incorrect. Completing an already completed
    /// session returns the stored score unchanged.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Score {
        if let Some(completion) = self.completion {
            return completion.score;
        }

        let correct = self.correct_count();
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let score = Score::from_counts(correct, total);
        self.completion = Some(Completion {
            score,
            completed_at: now,
        });
        score
    }

    /// Per-question review rows in sequence order.
    #[must_use]
    pub fn outcomes(&self) -> Vec<QuestionOutcome> {
        self.questions
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let submitted = self.answers.get(&position).cloned();
                let correct = submitted
                    .as_ref()
                    .is_some_and(|answer| question.is_correct(answer, self.text_match));
                QuestionOutcome {
                    position,
                    question_id: question.id(),
                    submitted,
                    expected: question.expected_answer(),
                    correct,
                    explanation: question.explanation().to_string(),
                }
            })
            .collect()
    }

    fn correct_count(&self) -> u32 {
        let count = self
            .questions
            .iter()
            .enumerate()
            .filter(|(position, question)| {
                self.answers
                    .get(position)
                    .is_some_and(|answer| question.is_correct(answer, self.text_match))
            })
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
