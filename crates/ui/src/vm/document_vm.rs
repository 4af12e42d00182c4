use services::DocumentLibrary;
use study_core::model::{Document, DocumentFilter, DocumentId, SubjectFilter, format_size};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRowVm {
    pub id: DocumentId,
    pub name: String,
    pub format_label: &'static str,
    pub size_label: String,
    pub subject: String,
    pub uploaded_label: String,
    pub status_label: String,
    pub processed: bool,
}

impl From<&Document> for DocumentRowVm {
    fn from(doc: &Document) -> Self {
        let status_label = if doc.is_processed() {
            format!("{} questions generated", doc.questions_generated())
        } else {
            "Pending processing".to_string()
        };
        Self {
            id: doc.id(),
            name: doc.name().to_string(),
            format_label: doc.format().label(),
            size_label: format_size(doc.size_bytes()),
            subject: doc.subject().to_string(),
            uploaded_label: format_date(doc.uploaded_on()),
            status_label,
            processed: doc.is_processed(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectOptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentListVm {
    pub rows: Vec<DocumentRowVm>,
    pub subjects: Vec<SubjectOptionVm>,
    pub empty_message: &'static str,
    pub summary_label: String,
}

/// Map the library through the current search box and subject select values.
#[must_use]
pub fn map_document_list(library: &DocumentLibrary, query: &str, subject: &str) -> DocumentListVm {
    let filter = DocumentFilter::new(query, SubjectFilter::from_value(subject));
    let rows = library
        .list(&filter)
        .into_iter()
        .map(DocumentRowVm::from)
        .collect::<Vec<_>>();

    let subjects = DocumentLibrary::subjects()
        .into_iter()
        .map(|value| SubjectOptionVm {
            value: value.to_string(),
            label: if value == "all" {
                "All subjects".to_string()
            } else {
                value.to_string()
            },
        })
        .collect();

    let empty_message = if library.is_empty() {
        "No documents yet."
    } else {
        "No documents match your filters."
    };

    DocumentListVm {
        summary_label: format!(
            "{} of {} documents • {} questions generated",
            rows.len(),
            library.len(),
            library.questions_generated()
        ),
        rows,
        subjects,
        empty_message,
    }
}
