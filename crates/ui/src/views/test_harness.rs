use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AssessmentService, DocumentLibrary, QuestionBank};
use study_core::model::{LearnerProfile, TextMatch};
use study_core::time::fixed_clock;

use crate::context::{UiApp, UiState, build_app_context, use_ui_state_provider};
use crate::views::{AssessmentView, DocumentsView, HomeView};

#[derive(Clone)]
struct TestApp {
    learner: LearnerProfile,
    question_bank: Arc<QuestionBank>,
    documents: DocumentLibrary,
    text_match: TextMatch,
}

impl UiApp for TestApp {
    fn learner(&self) -> LearnerProfile {
        self.learner.clone()
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    fn document_library(&self) -> DocumentLibrary {
        self.documents.clone()
    }

    fn assessment_service(&self) -> AssessmentService {
        AssessmentService::new(fixed_clock()).with_text_match(self.text_match)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Documents,
    Assessments,
}

/// Lets a test reach signals created inside the VirtualDom.
#[derive(Clone, Default)]
struct HarnessHandles {
    state: Rc<RefCell<Option<UiState>>>,
    view: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

impl HarnessHandles {
    fn state(&self) -> UiState {
        (*self.state.borrow()).expect("ui state registered")
    }

    fn view(&self) -> Signal<ViewKind> {
        (*self.view.borrow()).expect("view signal registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_signal(|| props.view);
    use_context_provider(|| view);
    let state = use_ui_state_provider();
    *props.handles.state.borrow_mut() = Some(state);
    *props.handles.view.borrow_mut() = Some(view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Documents => rsx! { DocumentsView {} },
        ViewKind::Assessments => rsx! { AssessmentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run `f` against the shared state inside the dom's runtime, then re-render.
    pub fn with_state<O>(&mut self, f: impl FnOnce(UiState) -> O) -> O {
        let state = self.handles.state();
        let out = self.dom.in_runtime(|| f(state));
        drive_dom(&mut self.dom);
        out
    }

    /// Swap the routed view, unmounting the current one.
    pub fn show(&mut self, kind: ViewKind) {
        let mut view = self.handles.view();
        self.dom.in_runtime(|| view.set(kind));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_learner() -> LearnerProfile {
    LearnerProfile {
        name: "Alex Johnson".to_string(),
        level: "Intermediate".to_string(),
        streak_days: 12,
        total_points: 1847,
        completed_courses: 8,
        study_hours: 47,
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_library(
        view,
        DocumentLibrary::seeded(fixed_clock()).expect("seed library"),
    )
}

pub fn setup_view_harness_with_library(view: ViewKind, documents: DocumentLibrary) -> ViewHarness {
    let app = Arc::new(TestApp {
        learner: test_learner(),
        question_bank: Arc::new(QuestionBank::builtin().expect("builtin bank")),
        documents,
        text_match: TextMatch::Exact,
    });

    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
