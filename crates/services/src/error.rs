//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use study_core::model::{DocumentError, DocumentId, QuestionError, SessionError, TemplateId};

/// Errors emitted by `AssessmentService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("no assessment in progress")]
    NotStarted,
    #[error("an assessment is already running; reset it first")]
    AlreadyStarted,
    #[error("unknown assessment template {0}")]
    UnknownTemplate(TemplateId),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `DocumentLibrary`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("document {0} not found")]
    NotFound(DocumentId),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors emitted while loading a question set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("failed to read question set {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question set is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question set is empty")]
    Empty,
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Library(#[from] LibraryError),
}
