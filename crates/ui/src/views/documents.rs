use dioxus::prelude::*;
use study_core::model::DocumentId;

use crate::context::UiState;
use crate::views::ViewError;
use crate::vm::map_document_list;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowAction {
    Process(DocumentId),
    Remove(DocumentId),
}

#[component]
pub fn DocumentsView() -> Element {
    let mut library = use_context::<UiState>().documents;
    let mut search = use_signal(String::new);
    let mut subject = use_signal(|| "all".to_string());
    let mut error = use_signal(|| None::<ViewError>);

    let list = map_document_list(&library.read(), &search(), &subject());

    let options = list.subjects.iter().map(|option| {
        let selected = option.value == subject();
        rsx! {
            option { value: "{option.value}", selected, "{option.label}" }
        }
    });

    let rows = list.rows.iter().map(|row| {
        let id = row.id;
        rsx! {
            li { class: "document-row", key: "{id}",
                div { class: "document-meta",
                    span { class: "document-format", "{row.format_label}" }
                    div {
                        h4 { class: "document-name", "{row.name}" }
                        p { class: "document-details",
                            "{row.size_label} • {row.subject} • {row.uploaded_label}"
                        }
                        p { class: "document-status", "{row.status_label}" }
                    }
                }
                div { class: "document-actions",
                    if !row.processed {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| run_row_action(library, error, RowAction::Process(id)),
                            "Process"
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| run_row_action(library, error, RowAction::Remove(id)),
                        "Remove"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page documents-page",
            header { class: "view-header",
                h2 { class: "view-title", "Document Manager" }
                p { class: "view-subtitle", "Upload and manage your educational content" }
            }
            div { class: "view-divider" }
            label { class: "document-upload",
                span { class: "btn btn-primary", "Upload Documents" }
                input {
                    class: "document-upload-input",
                    r#type: "file",
                    accept: ".pdf,.txt",
                    multiple: true,
                    onchange: move |evt| {
                        for file in evt.files() {
                            if let Err(err) = library.write().add_upload(file.name(), file.size()) {
                                error.set(Some(ViewError::from_library(&err)));
                                return;
                            }
                        }
                        error.set(None);
                    },
                }
            }
            div { class: "document-filters",
                input {
                    class: "document-search",
                    r#type: "search",
                    placeholder: "Search documents...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    class: "document-subject",
                    onchange: move |evt| subject.set(evt.value()),
                    {options}
                }
            }
            p { class: "document-summary", "{list.summary_label}" }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            if list.rows.is_empty() {
                p { class: "document-empty", "{list.empty_message}" }
            } else {
                ul { class: "document-list", {rows} }
            }
        }
    }
}

fn run_row_action(
    mut library: Signal<services::DocumentLibrary>,
    mut error: Signal<Option<ViewError>>,
    action: RowAction,
) {
    let result = match action {
        RowAction::Process(id) => library.write().process(id).map(|_| ()),
        RowAction::Remove(id) => library.write().remove(id).map(|_| ()),
    };
    error.set(result.err().map(|err| ViewError::from_library(&err)));
}
