#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment_service;
pub mod document_library;
pub mod error;
pub mod question_bank;

pub use study_core::Clock;

pub use app_services::{AppConfig, AppServices, DEFAULT_LEARNER_NAME};
pub use assessment_service::{AssessmentPhase, AssessmentService};
pub use document_library::DocumentLibrary;
pub use error::{AppServicesError, AssessmentError, LibraryError, QuestionSetError};
pub use question_bank::QuestionBank;
