use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use study_core::Clock;
use study_core::model::{
    Document, DocumentFilter, DocumentId, DocumentStatus, SUBJECTS, UNCATEGORIZED,
};

use crate::error::LibraryError;

/// Range of question counts a processed document reports.
const GENERATED_QUESTIONS: std::ops::Range<u32> = 10..40;

/// In-memory document list behind the library view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLibrary {
    clock: Clock,
    documents: Vec<Document>,
}

impl DocumentLibrary {
    #[must_use]
    pub fn empty(clock: Clock) -> Self {
        Self {
            clock,
            documents: Vec::new(),
        }
    }

    /// A library pre-filled with the three sample documents.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Document` if a sample document fails validation.
    pub fn seeded(clock: Clock) -> Result<Self, LibraryError> {
        let mut library = Self::empty(clock);
        let samples = [
            (1, "Advanced Calculus Notes.pdf", 2_516_582, "Mathematics", 15, Some(25)),
            (2, "Physics Quantum Mechanics.pdf", 4_299_162, "Physics", 14, Some(18)),
            (3, "Organic Chemistry Basics.txt", 876_544, "Chemistry", 13, None),
        ];

        for (id, name, size, subject, day, generated) in samples {
            let uploaded_on = NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default();
            let status = generated.map_or(DocumentStatus::Pending, |questions_generated| {
                DocumentStatus::Processed {
                    questions_generated,
                }
            });
            let document = Document::new(DocumentId::new(id), name, size, subject, uploaded_on)?
                .with_status(status);
            library.documents.push(document);
        }

        Ok(library)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == id)
    }

    /// Documents matching `filter`, in insertion order.
    #[must_use]
    pub fn list(&self, filter: &DocumentFilter) -> Vec<&Document> {
        self.documents.iter().filter(|d| filter.matches(d)).collect()
    }

    /// Subject filter options, starting with `"all"`.
    #[must_use]
    pub fn subjects() -> Vec<&'static str> {
        std::iter::once("all").chain(SUBJECTS).collect()
    }

    /// Number of processed documents.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_processed()).count()
    }

    /// Total questions generated across processed documents.
    #[must_use]
    pub fn questions_generated(&self) -> u32 {
        self.documents
            .iter()
            .map(Document::questions_generated)
            .sum()
    }

    /// Add an uploaded file as a pending, uncategorized document dated today.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Document` if `name` is blank.
    pub fn add_upload(
        &mut self,
        name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<&Document, LibraryError> {
        let id = self
            .documents
            .iter()
            .map(Document::id)
            .max()
            .map_or(DocumentId::new(1), DocumentId::next);
        let document = Document::new(id, name, size_bytes, UNCATEGORIZED, self.clock.today())?;
        info!(id = %id, name = document.name(), size_bytes, "document added");

        let index = self.documents.len();
        self.documents.push(document);
        Ok(&self.documents[index])
    }

    /// Mark a document processed with a randomly drawn question count.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` for unknown ids.
    pub fn process(&mut self, id: DocumentId) -> Result<&Document, LibraryError> {
        let generated = rand::rng().random_range(GENERATED_QUESTIONS);
        self.process_with(id, generated)
    }

    /// Mark a document processed with an explicit question count.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` for unknown ids.
    pub fn process_with(
        &mut self,
        id: DocumentId,
        questions_generated: u32,
    ) -> Result<&Document, LibraryError> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or(LibraryError::NotFound(id))?;
        document.mark_processed(questions_generated);
        debug!(id = %id, questions_generated, "document processed");
        Ok(document)
    }

    /// Remove a document from the library.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` for unknown ids.
    pub fn remove(&mut self, id: DocumentId) -> Result<Document, LibraryError> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id() == id)
            .ok_or(LibraryError::NotFound(id))?;
        debug!(id = %id, "document removed");
        Ok(self.documents.remove(index))
    }
}
