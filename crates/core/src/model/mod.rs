mod answer;
mod document;
mod ids;
mod learner;
mod question;
mod score;
mod session;
mod template;

pub use answer::{Answer, ParseTextMatchError, TextMatch, choice_label};
pub use document::{
    Document, DocumentError, DocumentFilter, DocumentFormat, DocumentStatus, SUBJECTS,
    SubjectFilter, UNCATEGORIZED, format_size,
};
pub use ids::{DocumentId, ParseIdError, QuestionId, TemplateId};
pub use learner::LearnerProfile;
pub use question::{
    Question, QuestionBody, QuestionDraft, QuestionError, QuestionKind, validate_question_set,
};
pub use score::{Score, ScoreBand, round_percent};
pub use session::{Advance, AssessmentSession, QuestionOutcome, SessionError};
pub use template::{AssessmentTemplate, Difficulty, RecentResult};
