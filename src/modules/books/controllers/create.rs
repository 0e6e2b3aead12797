use std::sync::Arc;

use catalog_store::{BookCreate, BookStore};

use super::form::{BookDraft, Field};
use super::Navigation;

pub const CREATE_FAILED: &str = "Failed to create book";

/// State of the add-book form.
pub struct CreateController {
    store: Arc<dyn BookStore>,
    draft: BookDraft,
    loading: bool,
    error: Option<String>,
}

impl CreateController {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            store,
            draft: BookDraft::default(),
            loading: false,
            error: None,
        }
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// True while a submission is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and create the book.
    ///
    /// Invalid drafts never reach the store. The draft is kept on failure so the
    /// user can correct it and submit again.
    pub async fn submit(&mut self) -> Navigation {
        let payload: BookCreate = match self.draft.validate() {
            Ok(valid) => valid.into(),
            Err(e) => {
                self.error = Some(e.to_string());
                return Navigation::Stay;
            }
        };

        self.loading = true;
        self.error = None;

        let navigation = match self.store.create(&payload).await {
            Ok(book) => {
                tracing::info!(book_id = book.id, "book created");
                Navigation::Collection
            }
            Err(e) => {
                tracing::error!(error = %e, cause = %e.cause(), "Error creating book");
                self.error = Some(CREATE_FAILED.to_string());
                Navigation::Stay
            }
        };

        self.loading = false;
        navigation
    }
}
