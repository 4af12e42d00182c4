use std::sync::Arc;

use services::{AssessmentError, AssessmentPhase, AssessmentService, QuestionBank};
use study_core::model::{
    Answer, AssessmentSession, AssessmentTemplate, Difficulty, QuestionKind, RecentResult, Score,
    ScoreBand, TemplateId, choice_label,
};

use crate::views::ViewError;
use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    /// Start from a catalogue template, or the quick assessment when `None`.
    Start(Option<TemplateId>),
    Choose(usize),
    SetTruth(bool),
    SetText(String),
    Next,
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCardVm {
    pub id: TemplateId,
    pub title: String,
    pub subject: String,
    pub questions_label: String,
    pub duration_label: String,
    pub difficulty_label: String,
    pub difficulty_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentResultVm {
    pub subject: String,
    pub initial: String,
    pub score_label: String,
    pub score_class: &'static str,
    pub meta_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogueVm {
    pub templates: Vec<TemplateCardVm>,
    pub recent: Vec<RecentResultVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position_label: String,
    pub progress_percent: u8,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<ChoiceVm>,
    pub truth: Option<bool>,
    pub text: String,
    pub can_advance: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRowVm {
    pub number: usize,
    pub prompt: String,
    pub submitted_label: String,
    pub expected_label: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percent: u8,
    pub band_label: &'static str,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    pub rows: Vec<OutcomeRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentScreen {
    Catalogue(CatalogueVm),
    Question(QuestionVm),
    Results(ResultsVm),
}

/// View model behind the assessment page; owns the page's assessment manager.
pub struct AssessmentVm {
    service: AssessmentService,
    bank: Arc<QuestionBank>,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(service: AssessmentService, bank: Arc<QuestionBank>) -> Self {
        Self { service, bank }
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        self.service.phase()
    }

    /// # Errors
    ///
    /// Returns the `ViewError` matching the rejected service call.
    pub fn apply(&mut self, intent: AssessmentIntent) -> Result<(), ViewError> {
        let result = match intent {
            AssessmentIntent::Start(template) => {
                // A start that cannot succeed keeps the current attempt.
                if let Some(id) = template.filter(|id| self.bank.template(*id).is_none()) {
                    return Err(ViewError::from_assessment(&AssessmentError::UnknownTemplate(id)));
                }
                if self.bank.questions().is_empty() {
                    return Err(ViewError::EmptyAssessment);
                }
                self.service.reset();
                match template {
                    Some(id) => self.service.start_template(&self.bank, id).map(|_| ()),
                    None => self.service.start(self.bank.questions()).map(|_| ()),
                }
            }
            AssessmentIntent::Choose(index) => self.service.answer_current(Answer::Choice(index)),
            AssessmentIntent::SetTruth(value) => {
                self.service.answer_current(Answer::Boolean(value))
            }
            AssessmentIntent::SetText(text) => self.service.answer_current(Answer::Text(text)),
            AssessmentIntent::Next => self.service.advance().map(|_| ()),
            AssessmentIntent::Reset => {
                self.service.reset();
                Ok(())
            }
        };
        result.map_err(|err| ViewError::from_assessment(&err))
    }

    #[must_use]
    pub fn screen(&self) -> AssessmentScreen {
        match self.service.session() {
            None => AssessmentScreen::Catalogue(map_catalogue(&self.bank)),
            Some(session) if session.is_complete() => {
                AssessmentScreen::Results(map_results(session))
            }
            Some(session) => AssessmentScreen::Question(map_question(session)),
        }
    }
}

fn map_catalogue(bank: &QuestionBank) -> CatalogueVm {
    CatalogueVm {
        templates: bank.templates().iter().map(map_template).collect(),
        recent: bank.recent_results().iter().map(map_recent).collect(),
    }
}

fn map_template(template: &AssessmentTemplate) -> TemplateCardVm {
    TemplateCardVm {
        id: template.id,
        title: template.title.clone(),
        subject: template.subject.clone(),
        questions_label: template.question_count.to_string(),
        duration_label: format!("{} min", template.duration_minutes),
        difficulty_label: template.difficulty.to_string(),
        difficulty_class: match template.difficulty {
            Difficulty::Beginner => "difficulty difficulty--beginner",
            Difficulty::Intermediate => "difficulty difficulty--intermediate",
            Difficulty::Advanced => "difficulty difficulty--advanced",
            Difficulty::Mixed => "difficulty difficulty--mixed",
        },
    }
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "score score--excellent",
        ScoreBand::Good => "score score--good",
        ScoreBand::NeedsWork => "score score--low",
    }
}

fn map_recent(result: &RecentResult) -> RecentResultVm {
    RecentResultVm {
        subject: result.subject.clone(),
        initial: result
            .subject
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |ch| ch.to_string()),
        score_label: format!("{}%", result.percent),
        score_class: band_class(result.band()),
        meta_label: format!(
            "{} questions • {}",
            result.question_count,
            format_date(result.taken_on)
        ),
    }
}

fn map_question(session: &AssessmentSession) -> QuestionVm {
    let question = session.current_question();
    let current = session.current_answer();

    let choices = question
        .choices()
        .iter()
        .enumerate()
        .map(|(index, text)| ChoiceVm {
            index,
            label: choice_label(index),
            text: text.clone(),
            class: if current == Some(&Answer::Choice(index)) {
                "choice choice--selected"
            } else {
                "choice"
            },
        })
        .collect();

    let truth = match current {
        Some(Answer::Boolean(value)) => Some(*value),
        _ => None,
    };
    let text = match current {
        Some(Answer::Text(text)) => text.clone(),
        _ => String::new(),
    };

    QuestionVm {
        position_label: format!("Question {} of {}", session.position() + 1, session.len()),
        progress_percent: session.progress_percent(),
        prompt: question.prompt().to_string(),
        kind: question.kind(),
        choices,
        truth,
        text,
        can_advance: current.is_some(),
        next_label: if session.is_last() {
            "Complete Assessment"
        } else {
            "Next Question"
        },
    }
}

fn map_results(session: &AssessmentSession) -> ResultsVm {
    let score = session
        .score()
        .unwrap_or_else(|| Score::from_counts(0, u32::try_from(session.len()).unwrap_or(0)));

    let rows = session
        .outcomes()
        .into_iter()
        .zip(session.questions())
        .map(|(outcome, question)| {
            let expected_label = match &outcome.expected {
                Answer::Choice(index) => question.choices().get(*index).map_or_else(
                    || outcome.expected.to_string(),
                    |text| format!("{}. {text}", choice_label(*index)),
                ),
                other => other.to_string(),
            };
            let submitted_label = match &outcome.submitted {
                None => "No answer".to_string(),
                Some(Answer::Choice(index)) => question.choices().get(*index).map_or_else(
                    || choice_label(*index),
                    |text| format!("{}. {text}", choice_label(*index)),
                ),
                Some(other) => other.to_string(),
            };
            OutcomeRowVm {
                number: outcome.position + 1,
                prompt: question.prompt().to_string(),
                submitted_label,
                expected_label,
                correct: outcome.correct,
                explanation: outcome.explanation,
            }
        })
        .collect();

    ResultsVm {
        percent: score.percent(),
        band_label: score.band().label(),
        correct: score.correct(),
        incorrect: score.incorrect(),
        total: score.total(),
        rows,
    }
}
