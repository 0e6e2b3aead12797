use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a book record.
pub type BookId = u64;

/// Maximum length of a book title or author name.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of an ISBN.
pub const MAX_ISBN_LEN: usize = 13;
/// Accepted publication years, inclusive.
pub const PUBLICATION_YEARS: std::ops::RangeInclusive<i32> = 1000..=2100;

/// A book as held by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year the book was published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    /// ISBN-10 or ISBN-13
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// Request model for creating a new book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// Partial update; absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Book {
    /// Apply a partial update the way the store does.
    pub fn apply(&mut self, update: BookUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(year) = update.publication_year {
            self.publication_year = Some(year);
        }
        if let Some(isbn) = update.isbn {
            self.isbn = Some(isbn);
        }
    }
}
