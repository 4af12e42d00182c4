use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::DocumentId;

/// Subject assigned to freshly uploaded documents.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Subjects offered by the library filter, after "all".
pub const SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
];

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("document name is empty")]
    EmptyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Txt,
}

impl DocumentFormat {
    /// Names ending in lowercase `.pdf` are PDFs; everything else is treated as plain text.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::Txt
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Txt => "TXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Processed { questions_generated: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    name: String,
    format: DocumentFormat,
    size_bytes: u64,
    subject: String,
    uploaded_on: NaiveDate,
    status: DocumentStatus,
}

impl Document {
    /// Create a pending document; the format is inferred from the file name.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::EmptyName` if `name` is blank.
    pub fn new(
        id: DocumentId,
        name: impl Into<String>,
        size_bytes: u64,
        subject: impl Into<String>,
        uploaded_on: NaiveDate,
    ) -> Result<Self, DocumentError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DocumentError::EmptyName);
        }
        let subject = subject.into().trim().to_string();
        let subject = if subject.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            subject
        };

        Ok(Self {
            id,
            format: DocumentFormat::from_file_name(&name),
            name,
            size_bytes,
            subject,
            uploaded_on,
            status: DocumentStatus::Pending,
        })
    }

    #[must_use]
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn mark_processed(&mut self, questions_generated: u32) {
        self.status = DocumentStatus::Processed {
            questions_generated,
        };
    }

    #[must_use]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn uploaded_on(&self) -> NaiveDate {
        self.uploaded_on
    }

    #[must_use]
    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    #[must_use]
    pub fn is_processed(&self) -> bool {
        matches!(self.status, DocumentStatus::Processed { .. })
    }

    #[must_use]
    pub fn questions_generated(&self) -> u32 {
        match self.status {
            DocumentStatus::Pending => 0,
            DocumentStatus::Processed {
                questions_generated,
            } => questions_generated,
        }
    }
}

/// Human-readable size: one decimal in MB from 1 MiB up, whole KB below.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        #[allow(clippy::cast_precision_loss)]
        let mb = bytes as f64 / MIB as f64;
        format!("{mb:.1} MB")
    } else {
        format!("{} KB", (bytes + 512) / 1024)
    }
}

//
// ─── FILTERING ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl SubjectFilter {
    /// Parse a select-box value; `"all"` (any case) or blank means no filter.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            SubjectFilter::All
        } else {
            SubjectFilter::Subject(value.to_string())
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            SubjectFilter::All => "all",
            SubjectFilter::Subject(subject) => subject,
        }
    }

    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Subject(wanted) => wanted == subject,
        }
    }
}

/// Name search plus subject filter, both of which must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub query: String,
    pub subject: SubjectFilter,
}

impl DocumentFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, subject: SubjectFilter) -> Self {
        Self {
            query: query.into(),
            subject,
        }
    }

    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        let query = self.query.to_lowercase();
        document.name().to_lowercase().contains(&query) && self.subject.matches(document.subject())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn format_follows_pdf_suffix() {
        let pdf = Document::new(DocumentId::new(1), "notes.pdf", 10, "Physics", day()).unwrap();
        let txt = Document::new(DocumentId::new(2), "notes.md", 10, "Physics", day()).unwrap();
        let upper = Document::new(DocumentId::new(3), "Notes.PDF", 10, "Physics", day()).unwrap();
        assert_eq!(pdf.format(), DocumentFormat::Pdf);
        assert_eq!(txt.format(), DocumentFormat::Txt);
        assert_eq!(upper.format(), DocumentFormat::Txt);
    }

    #[test]
    fn blank_name_is_rejected_and_blank_subject_defaults() {
        assert_eq!(
            Document::new(DocumentId::new(1), "  ", 1, "Physics", day()),
            Err(DocumentError::EmptyName)
        );
        let doc = Document::new(DocumentId::new(1), "a.txt", 1, " ", day()).unwrap();
        assert_eq!(doc.subject(), UNCATEGORIZED);
        assert!(!doc.is_processed());
    }

    #[test]
    fn processing_records_question_count() {
        let mut doc = Document::new(DocumentId::new(1), "a.pdf", 1, "Biology", day()).unwrap();
        doc.mark_processed(17);
        assert!(doc.is_processed());
        assert_eq!(doc.questions_generated(), 17);
    }

    #[test]
    fn sizes_format_like_the_library_listing() {
        assert_eq!(format_size(2_516_582), "2.4 MB");
        assert_eq!(format_size(876_544), "856 KB");
        assert_eq!(format_size(0), "0 KB");
    }

    #[test]
    fn filter_matches_name_case_insensitively_and_subject_exactly() {
        let doc = Document::new(
            DocumentId::new(1),
            "Advanced Calculus Notes.pdf",
            1,
            "Mathematics",
            day(),
        )
        .unwrap();

        assert!(DocumentFilter::default().matches(&doc));
        assert!(DocumentFilter::new("CALCULUS", SubjectFilter::All).matches(&doc));
        assert!(
            DocumentFilter::new("notes", SubjectFilter::from_value("Mathematics")).matches(&doc)
        );
        assert!(!DocumentFilter::new("notes", SubjectFilter::from_value("mathematics")).matches(&doc));
        assert!(!DocumentFilter::new("physics", SubjectFilter::All).matches(&doc));
    }

    #[test]
    fn subject_filter_round_trips_select_values() {
        assert_eq!(SubjectFilter::from_value("all"), SubjectFilter::All);
        assert_eq!(SubjectFilter::from_value("Physics").value(), "Physics");
        assert_eq!(SubjectFilter::All.value(), "all");
    }
}
