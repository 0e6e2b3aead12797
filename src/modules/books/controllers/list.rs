use std::sync::Arc;

use catalog_store::{Book, BookId, BookStore};

pub const LOAD_FAILED: &str = "Failed to load books";
pub const DELETE_FAILED: &str = "Failed to delete book";

/// What the collection screen shows. Exactly one applies at a time.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    /// Shown with a retry control.
    Error { message: &'a str },
    /// Shown with a call to add the first book.
    Empty,
    Populated(&'a [Book]),
}

/// State of the collection screen.
pub struct ListController {
    store: Arc<dyn BookStore>,
    items: Vec<Book>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<BookId>,
}

impl ListController {
    /// A controller that has not fetched yet; it starts out loading.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
        }
    }

    pub fn items(&self) -> &[Book] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_delete(&self) -> Option<BookId> {
        self.pending_delete
    }

    /// Fetch the collection. Used on activation and for retry.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.store.list().await {
            Ok(books) => {
                tracing::debug!(count = books.len(), "books loaded");
                self.items = books;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, cause = %e.cause(), "Error loading books");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Ask for confirmation before deleting `id`.
    ///
    /// Returns the book to describe in the prompt, or `None` when the id is
    /// not in the current collection.
    pub fn request_delete(&mut self, id: BookId) -> Option<&Book> {
        let book = self.items.iter().find(|book| book.id == id);
        self.pending_delete = book.map(|book| book.id);
        book
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the book awaiting confirmation.
    ///
    /// On success the row is dropped locally without re-fetching. Returns
    /// whether a book was removed.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };

        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(book_id = id, "book deleted");
                self.items.retain(|book| book.id != id);
                true
            }
            Err(e) => {
                tracing::error!(book_id = id, error = %e, cause = %e.cause(), "Error deleting book");
                self.error = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if let Some(message) = &self.error {
            ListView::Error {
                message: message.as_str(),
            }
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated(&self.items)
        }
    }

    /// "1 book" / "N books", followed by "in your library".
    pub fn summary(&self) -> String {
        let count = self.items.len();
        let noun = if count == 1 { "book" } else { "books" };
        format!("{count} {noun} in your library")
    }
}
