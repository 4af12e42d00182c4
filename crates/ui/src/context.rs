use std::sync::Arc;

use dioxus::prelude::*;
use services::{AssessmentService, DocumentLibrary, QuestionBank};
use study_core::model::LearnerProfile;

use crate::vm::AssessmentVm;

pub trait UiApp: Send + Sync {
    fn learner(&self) -> LearnerProfile;
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn document_library(&self) -> DocumentLibrary;
    fn assessment_service(&self) -> AssessmentService;
}

#[derive(Clone)]
pub struct AppContext {
    learner: LearnerProfile,
    question_bank: Arc<QuestionBank>,
    document_seed: DocumentLibrary,
    assessments: AssessmentService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            learner: app.learner(),
            question_bank: app.question_bank(),
            document_seed: app.document_library(),
            assessments: app.assessment_service(),
        }
    }

    #[must_use]
    pub fn learner(&self) -> &LearnerProfile {
        &self.learner
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    /// Library contents at launch; the working copy lives in [`UiState`].
    #[must_use]
    pub fn document_library(&self) -> DocumentLibrary {
        self.document_seed.clone()
    }

    /// An idle assessment manager carrying the app's clock and text-match policy.
    #[must_use]
    pub fn assessment_service(&self) -> AssessmentService {
        let mut service = self.assessments.clone();
        service.reset();
        service
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Working state shared by every route: the document library and the
/// assessment attempt survive navigation between views.
#[derive(Clone, Copy)]
pub struct UiState {
    pub documents: Signal<DocumentLibrary>,
    pub assessment: Signal<AssessmentVm>,
}

/// Create the shared `UiState` from the surrounding `AppContext` and provide it
/// to descendants. Call once at the root of the tree.
pub fn use_ui_state_provider() -> UiState {
    let ctx = use_context::<AppContext>();
    let documents = use_signal(|| ctx.document_library());
    let assessment =
        use_signal(|| AssessmentVm::new(ctx.assessment_service(), ctx.question_bank()));
    use_context_provider(|| UiState {
        documents,
        assessment,
    })
}
