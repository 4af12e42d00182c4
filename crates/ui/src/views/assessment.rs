use dioxus::prelude::*;
use study_core::model::QuestionKind;

use crate::context::UiState;
use crate::views::ViewError;
use crate::vm::{
    AssessmentIntent, AssessmentScreen, AssessmentVm, CatalogueVm, QuestionVm, ResultsVm,
};

#[component]
pub fn AssessmentView() -> Element {
    let vm = use_context::<UiState>().assessment;
    let error = use_signal(|| None::<ViewError>);

    let screen = vm.read().screen();
    let body = match screen {
        AssessmentScreen::Catalogue(catalogue) => catalogue_screen(vm, error, &catalogue),
        AssessmentScreen::Question(question) => question_screen(vm, error, &question),
        AssessmentScreen::Results(results) => results_screen(vm, error, &results),
    };

    rsx! {
        div { class: "page assessment-page",
            header { class: "view-header",
                h2 { class: "view-title", "Assessments" }
                p { class: "view-subtitle", "Test your knowledge and track your progress" }
            }
            div { class: "view-divider" }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            {body}
        }
    }
}

fn dispatch(
    mut vm: Signal<AssessmentVm>,
    mut error: Signal<Option<ViewError>>,
    intent: AssessmentIntent,
) {
    let result = vm.write().apply(intent);
    error.set(result.err());
}

fn catalogue_screen(
    vm: Signal<AssessmentVm>,
    error: Signal<Option<ViewError>>,
    catalogue: &CatalogueVm,
) -> Element {
    let cards = catalogue.templates.iter().map(|card| {
        let id = card.id;
        rsx! {
            div { class: "template-card", key: "{id}",
                div { class: "template-card-head",
                    h3 { class: "template-title", "{card.title}" }
                    span { class: card.difficulty_class, "{card.difficulty_label}" }
                }
                p { class: "template-subject", "{card.subject}" }
                div { class: "template-meta",
                    span { "{card.questions_label} questions" }
                    span { "{card.duration_label}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch(vm, error, AssessmentIntent::Start(Some(id))),
                    "Start Assessment"
                }
            }
        }
    });

    let recent = catalogue.recent.iter().map(|result| {
        rsx! {
            li { class: "recent-row",
                span { class: "avatar", "{result.initial}" }
                div { class: "recent-meta",
                    p { class: "recent-subject", "{result.subject}" }
                    p { class: "recent-details", "{result.meta_label}" }
                }
                span { class: result.score_class, "{result.score_label}" }
            }
        }
    });

    rsx! {
        section { class: "assessment-catalogue",
            div { class: "quick-start",
                h3 { "Quick Assessment" }
                p { "A short mixed quiz covering every question type." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch(vm, error, AssessmentIntent::Start(None)),
                    "Start Quick Assessment"
                }
            }
            h3 { class: "section-title", "Available Assessments" }
            div { class: "template-grid", {cards} }
            h3 { class: "section-title", "Recent Results" }
            ul { class: "recent-list", {recent} }
        }
    }
}

fn question_screen(
    vm: Signal<AssessmentVm>,
    error: Signal<Option<ViewError>>,
    question: &QuestionVm,
) -> Element {
    let input = match question.kind {
        QuestionKind::MultipleChoice => {
            let choices = question.choices.iter().map(|choice| {
                let index = choice.index;
                rsx! {
                    button {
                        class: choice.class,
                        r#type: "button",
                        key: "{index}",
                        onclick: move |_| dispatch(vm, error, AssessmentIntent::Choose(index)),
                        span { class: "choice-label", "{choice.label}" }
                        span { class: "choice-text", "{choice.text}" }
                    }
                }
            });
            rsx! { div { class: "choice-list", {choices} } }
        }
        QuestionKind::TrueFalse => {
            let truth_class = |value: bool| {
                if question.truth == Some(value) {
                    "choice choice--selected"
                } else {
                    "choice"
                }
            };
            rsx! {
                div { class: "truth-buttons",
                    button {
                        class: truth_class(true),
                        r#type: "button",
                        onclick: move |_| dispatch(vm, error, AssessmentIntent::SetTruth(true)),
                        "True"
                    }
                    button {
                        class: truth_class(false),
                        r#type: "button",
                        onclick: move |_| dispatch(vm, error, AssessmentIntent::SetTruth(false)),
                        "False"
                    }
                }
            }
        }
        QuestionKind::FreeText => rsx! {
            input {
                class: "answer-input",
                r#type: "text",
                placeholder: "Type your answer...",
                value: "{question.text}",
                oninput: move |evt| dispatch(vm, error, AssessmentIntent::SetText(evt.value())),
            }
        },
    };

    let can_advance = question.can_advance;

    rsx! {
        section { class: "assessment-question",
            div { class: "question-progress",
                span { class: "question-position", "{question.position_label}" }
                span { class: "question-kind", "{question.kind}" }
            }
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    style: "width: {question.progress_percent}%",
                }
            }
            h3 { class: "question-prompt", "{question.prompt}" }
            {input}
            div { class: "question-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch(vm, error, AssessmentIntent::Reset),
                    "Quit"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_advance,
                    onclick: move |_| dispatch(vm, error, AssessmentIntent::Next),
                    "{question.next_label}"
                }
            }
        }
    }
}

fn results_screen(
    vm: Signal<AssessmentVm>,
    error: Signal<Option<ViewError>>,
    results: &ResultsVm,
) -> Element {
    let rows = results.rows.iter().map(|row| {
        let class = if row.correct {
            "outcome outcome--correct"
        } else {
            "outcome outcome--incorrect"
        };
        rsx! {
            li { class, key: "{row.number}",
                p { class: "outcome-prompt", "{row.number}. {row.prompt}" }
                p { class: "outcome-answer", "Your answer: {row.submitted_label}" }
                if !row.correct {
                    p { class: "outcome-expected", "Correct answer: {row.expected_label}" }
                }
                if !row.explanation.is_empty() {
                    p { class: "outcome-explanation", "{row.explanation}" }
                }
            }
        }
    });

    rsx! {
        section { class: "assessment-results",
            h3 { "Assessment Complete!" }
            p { class: "results-score", "{results.percent}%" }
            p { class: "results-band", "{results.band_label}" }
            div { class: "results-counts",
                span { "Correct: {results.correct}" }
                span { "Incorrect: {results.incorrect}" }
                span { "Total: {results.total}" }
            }
            ul { class: "outcome-list", {rows} }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch(vm, error, AssessmentIntent::Reset),
                "Take Another Assessment"
            }
        }
    }
}
