use dioxus::prelude::WritableExt;
use services::DocumentLibrary;
use study_core::model::DocumentId;
use study_core::time::fixed_clock;

use crate::vm::AssessmentIntent;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_library};

#[test]
fn home_view_smoke_renders_greeting_and_stats() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome back, Alex Johnson!"), "missing greeting in {html}");
    assert!(html.contains("12 days"), "missing streak in {html}");
    assert!(html.contains("1847"), "missing points in {html}");
    assert!(html.contains("3 documents, 2 processed"), "missing library label in {html}");
    assert!(html.contains("4 assessments available"), "missing catalogue label in {html}");
}

#[test]
fn documents_view_smoke_renders_seeded_rows() {
    let mut harness = setup_view_harness(ViewKind::Documents);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Document Manager"), "missing title in {html}");
    assert!(html.contains("Advanced Calculus Notes.pdf"), "missing row in {html}");
    assert!(html.contains("Organic Chemistry Basics.txt"), "missing row in {html}");
    assert!(html.contains("2.4 MB"), "missing size in {html}");
    assert!(html.contains("25 questions generated"), "missing status in {html}");
    assert!(html.contains("Pending processing"), "missing pending status in {html}");
    assert!(html.contains("All subjects"), "missing subject option in {html}");
    assert!(html.contains("Process"), "missing process button in {html}");
}

#[test]
fn documents_view_smoke_renders_empty_library_message() {
    let mut harness =
        setup_view_harness_with_library(ViewKind::Documents, DocumentLibrary::empty(fixed_clock()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No documents yet."), "missing empty message in {html}");
    assert!(html.contains("0 of 0 documents"), "missing summary in {html}");
}

#[test]
fn assessment_view_smoke_renders_catalogue() {
    let mut harness = setup_view_harness(ViewKind::Assessments);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Start Quick Assessment"), "missing quick start in {html}");
    assert!(html.contains("Mathematics Assessment"), "missing template in {html}");
    assert!(html.contains("Chemistry Basics"), "missing template in {html}");
    assert!(html.contains("30 min"), "missing duration in {html}");
    assert!(html.contains("Recent Results"), "missing recent heading in {html}");
    assert!(html.contains("92%"), "missing recent score in {html}");
}

#[test]
fn processed_document_shows_on_dashboard_after_navigation() {
    let mut harness = setup_view_harness(ViewKind::Documents);
    harness.rebuild();
    assert!(harness.render().contains("Pending processing"));

    harness.with_state(|state| {
        let mut documents = state.documents;
        let processed = documents
            .write()
            .process_with(DocumentId::new(3), 20)
            .map(|_| ());
        processed
    })
    .expect("process document");
    let html = harness.render();
    assert!(!html.contains("Pending processing"), "row still pending in {html}");

    harness.show(ViewKind::Home);
    let html = harness.render();
    assert!(html.contains("3 documents, 3 processed"), "stale dashboard in {html}");

    harness.show(ViewKind::Documents);
    let html = harness.render();
    assert!(html.contains("20 questions generated"), "library re-seeded in {html}");
}

#[test]
fn uploaded_document_is_listed() {
    let mut harness = setup_view_harness(ViewKind::Documents);
    harness.rebuild();

    harness.with_state(|state| {
        let mut documents = state.documents;
        let added = documents
            .write()
            .add_upload("Cell Biology.pdf", 1_048_576)
            .map(|_| ());
        added
    })
    .expect("add upload");

    let html = harness.render();
    assert!(html.contains("Cell Biology.pdf"), "missing upload in {html}");
    assert!(html.contains("1.0 MB"), "missing size in {html}");
    assert!(html.contains("Upload Documents"), "missing upload control in {html}");
}

#[test]
fn assessment_attempt_survives_leaving_the_page() {
    let mut harness = setup_view_harness(ViewKind::Assessments);
    harness.rebuild();

    harness.with_state(|state| {
        let mut vm = state.assessment;
        let mut vm = vm.write();
        vm.apply(AssessmentIntent::Start(None))?;
        vm.apply(AssessmentIntent::Choose(0))?;
        vm.apply(AssessmentIntent::Next)
    })
    .expect("answer first question");
    assert!(harness.render().contains("Question 2 of 4"));

    harness.show(ViewKind::Home);
    harness.show(ViewKind::Assessments);
    let html = harness.render();
    assert!(html.contains("Question 2 of 4"), "attempt lost in {html}");
}
