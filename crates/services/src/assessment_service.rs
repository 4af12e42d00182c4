use tracing::{debug, info};

use study_core::Clock;
use study_core::model::{
    Advance, Answer, AssessmentSession, Question, Score, TemplateId, TextMatch,
};

use crate::error::AssessmentError;
use crate::question_bank::QuestionBank;

/// Lifecycle phase of the assessment manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    NotStarted,
    InProgress,
    Completed,
}

/// Owns at most one assessment session and drives it through
/// `NotStarted -> InProgress -> Completed`.
///
/// Every rejected call leaves the manager exactly as it was. `reset` is the
/// only way back to `NotStarted` and discards the session with its answers.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    clock: Clock,
    text_match: TextMatch,
    session: Option<AssessmentSession>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            text_match: TextMatch::default(),
            session: None,
        }
    }

    #[must_use]
    pub fn with_text_match(mut self, text_match: TextMatch) -> Self {
        self.text_match = text_match;
        self
    }

    #[must_use]
    pub fn text_match(&self) -> TextMatch {
        self.text_match
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        match &self.session {
            None => AssessmentPhase::NotStarted,
            Some(session) if session.is_complete() => AssessmentPhase::Completed,
            Some(_) => AssessmentPhase::InProgress,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&AssessmentSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.session.as_ref().and_then(AssessmentSession::score)
    }

    /// Start a new session over a copy of `questions`.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::AlreadyStarted` while a session exists and
    /// `SessionError::Empty` (wrapped) for an empty question set.
    pub fn start(&mut self, questions: &[Question]) -> Result<&AssessmentSession, AssessmentError> {
        if self.session.is_some() {
            return Err(AssessmentError::AlreadyStarted);
        }

        let session = AssessmentSession::start(questions, self.text_match, self.clock.now())?;
        info!(
            questions = session.len(),
            text_match = self.text_match.as_str(),
            "assessment started"
        );
        Ok(self.session.insert(session))
    }

    /// Start a session from a catalogue template.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownTemplate` for ids missing from `bank`,
    /// otherwise the same errors as [`AssessmentService::start`].
    pub fn start_template(
        &mut self,
        bank: &QuestionBank,
        template_id: TemplateId,
    ) -> Result<&AssessmentSession, AssessmentError> {
        let questions = bank
            .questions_for(template_id)
            .ok_or(AssessmentError::UnknownTemplate(template_id))?;
        debug!(template = %template_id, "starting assessment from template");
        self.start(questions)
    }

    /// Record an answer at `position`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotStarted` before `start`, otherwise the
    /// session's own validation errors.
    pub fn submit_answer(&mut self, position: usize, answer: Answer) -> Result<(), AssessmentError> {
        let session = self.session_mut()?;
        session.submit_answer(position, answer)?;
        debug!(position, "answer recorded");
        Ok(())
    }

    /// Record an answer for the question under the cursor.
    ///
    /// # Errors
    ///
    /// See [`AssessmentService::submit_answer`].
    pub fn answer_current(&mut self, answer: Answer) -> Result<(), AssessmentError> {
        let position = self
            .session
            .as_ref()
            .map(AssessmentSession::position)
            .ok_or(AssessmentError::NotStarted)?;
        self.submit_answer(position, answer)
    }

    /// Move to the next question, completing the session from the last one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotStarted` before `start`, and wraps
    /// `SessionError::Unanswered` / `SessionError::Completed`.
    pub fn advance(&mut self) -> Result<Advance, AssessmentError> {
        let now = self.clock.now();
        let step = self.session_mut()?.advance(now)?;
        match step {
            Advance::Moved { position } => debug!(position, "advanced"),
            Advance::Completed(score) => log_completion(score),
        }
        Ok(step)
    }

    /// Score the session and mark it complete. Repeated calls return the same score.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotStarted` before `start`.
    pub fn complete(&mut self) -> Result<Score, AssessmentError> {
        let now = self.clock.now();
        let session = self.session_mut()?;
        let first_time = !session.is_complete();
        let score = session.complete(now);
        if first_time {
            log_completion(score);
        }
        Ok(score)
    }

    /// Discard the current session, if any.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            debug!("assessment reset");
        }
    }

    fn session_mut(&mut self) -> Result<&mut AssessmentSession, AssessmentError> {
        self.session.as_mut().ok_or(AssessmentError::NotStarted)
    }
}

fn log_completion(score: Score) {
    info!(
        correct = score.correct(),
        total = score.total(),
        percent = score.percent(),
        "assessment completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{QuestionId, SessionError};
    use study_core::time::fixed_clock;

    fn questions() -> Vec<Question> {
        vec![
            Question::true_false(QuestionId::new(1), "A", true, "").unwrap(),
            Question::free_text(QuestionId::new(2), "B", "Paris", "").unwrap(),
        ]
    }

    #[test]
    fn operations_before_start_are_rejected() {
        let mut svc = AssessmentService::new(fixed_clock());

        assert_eq!(
            svc.submit_answer(0, Answer::Boolean(true)),
            Err(AssessmentError::NotStarted)
        );
        assert_eq!(svc.advance(), Err(AssessmentError::NotStarted));
        assert_eq!(svc.complete(), Err(AssessmentError::NotStarted));
        assert_eq!(svc.phase(), AssessmentPhase::NotStarted);
    }

    #[test]
    fn start_twice_requires_reset() {
        let mut svc = AssessmentService::new(fixed_clock());
        svc.start(&questions()).unwrap();

        assert_eq!(
            svc.start(&questions()).unwrap_err(),
            AssessmentError::AlreadyStarted
        );

        svc.reset();
        assert!(svc.start(&questions()).is_ok());
    }

    #[test]
    fn empty_question_set_keeps_manager_idle() {
        let mut svc = AssessmentService::new(fixed_clock());

        let err = svc.start(&[]).unwrap_err();

        assert_eq!(err, AssessmentError::Session(SessionError::Empty));
        assert_eq!(svc.phase(), AssessmentPhase::NotStarted);
    }

    #[test]
    fn text_match_policy_reaches_the_session() {
        let mut svc = AssessmentService::new(fixed_clock()).with_text_match(TextMatch::Normalized);
        svc.start(&questions()).unwrap();
        svc.submit_answer(1, Answer::Text("PARIS".into())).unwrap();

        assert_eq!(svc.complete().unwrap().correct(), 1);
    }

    #[test]
    fn answer_current_targets_cursor() {
        let mut svc = AssessmentService::new(fixed_clock());
        svc.start(&questions()).unwrap();
        svc.answer_current(Answer::Boolean(true)).unwrap();
        svc.advance().unwrap();
        svc.answer_current(Answer::Text("Paris".into())).unwrap();

        let session = svc.session().unwrap();
        assert_eq!(session.answer_at(0), Some(&Answer::Boolean(true)));
        assert_eq!(session.answer_at(1), Some(&Answer::Text("Paris".into())));
    }
}
