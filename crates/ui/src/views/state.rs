use services::{AssessmentError, LibraryError};
use study_core::model::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    EmptyAssessment,
    Unanswered,
    AssessmentFinished,
    DocumentMissing,
    InvalidDocument,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::EmptyAssessment => "This assessment has no questions yet.",
            ViewError::Unanswered => "Answer the question before moving on.",
            ViewError::AssessmentFinished => "This assessment is already finished.",
            ViewError::DocumentMissing => "That document is no longer in your library.",
            ViewError::InvalidDocument => "That file has no name and was not added.",
        }
    }

    // Keep error mapping in the UI boundary.
    #[must_use]
    pub fn from_assessment(err: &AssessmentError) -> Self {
        match err {
            AssessmentError::Session(SessionError::Empty) => ViewError::EmptyAssessment,
            AssessmentError::Session(SessionError::Unanswered { .. }) => ViewError::Unanswered,
            AssessmentError::Session(SessionError::Completed) => ViewError::AssessmentFinished,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn from_library(err: &LibraryError) -> Self {
        match err {
            LibraryError::NotFound(_) => ViewError::DocumentMissing,
            LibraryError::Document(_) => ViewError::InvalidDocument,
            _ => ViewError::Unknown,
        }
    }
}
