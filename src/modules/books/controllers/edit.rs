use std::sync::Arc;

use catalog_store::{BookId, BookStore, BookUpdate};

use super::form::{BookDraft, Field};
use super::Navigation;

pub const LOAD_FAILED: &str = "Failed to load book details.";
pub const UPDATE_FAILED: &str = "Failed to update book";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Loading,
    /// Terminal: the record could not be fetched.
    LoadFailed(String),
    Editing,
}

/// What the edit screen shows.
#[derive(Debug, PartialEq, Eq)]
pub enum EditView<'a> {
    Loading,
    /// Shown with a link back to the collection and no form.
    LoadFailed { message: &'a str },
    Form {
        draft: &'a BookDraft,
        error: Option<&'a str>,
        submitting: bool,
    },
}

/// State of the edit-book form for one record.
pub struct EditController {
    store: Arc<dyn BookStore>,
    id: BookId,
    phase: Phase,
    draft: BookDraft,
    submitting: bool,
    error: Option<String>,
}

impl EditController {
    pub fn new(store: Arc<dyn BookStore>, id: BookId) -> Self {
        Self {
            store,
            id,
            phase: Phase::Loading,
            draft: BookDraft::default(),
            submitting: false,
            error: None,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::LoadFailed(message) => Some(message.as_str()),
            _ => self.error.as_deref(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Fetch the record and fill the draft from it. A failure is final.
    pub async fn load(&mut self) {
        self.phase = Phase::Loading;

        match self.store.get(self.id).await {
            Ok(book) => {
                self.draft = BookDraft::from_book(&book);
                self.phase = Phase::Editing;
            }
            Err(e) => {
                tracing::error!(book_id = self.id, error = %e, cause = %e.cause(), "Error loading book");
                self.phase = Phase::LoadFailed(LOAD_FAILED.to_string());
            }
        }
    }

    /// Change a form input. Ignored until the record has loaded.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_editing() {
            self.draft.set(field, value);
        }
    }

    /// Validate the draft and send it as a full update of every field.
    pub async fn submit(&mut self) -> Navigation {
        if !self.is_editing() {
            return Navigation::Stay;
        }

        let payload: BookUpdate = match self.draft.validate() {
            Ok(valid) => valid.into(),
            Err(e) => {
                self.error = Some(e.to_string());
                return Navigation::Stay;
            }
        };

        self.submitting = true;
        self.error = None;

        let navigation = match self.store.update(self.id, &payload).await {
            Ok(_) => {
                tracing::info!(book_id = self.id, "book updated");
                Navigation::Collection
            }
            Err(e) => {
                tracing::error!(book_id = self.id, error = %e, cause = %e.cause(), "Error updating book");
                self.error = Some(UPDATE_FAILED.to_string());
                Navigation::Stay
            }
        };

        self.submitting = false;
        navigation
    }

    pub fn view(&self) -> EditView<'_> {
        match &self.phase {
            Phase::Loading => EditView::Loading,
            Phase::LoadFailed(message) => EditView::LoadFailed {
                message: message.as_str(),
            },
            Phase::Editing => EditView::Form {
                draft: &self.draft,
                error: self.error.as_deref(),
                submitting: self.submitting,
            },
        }
    }
}
