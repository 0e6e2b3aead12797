//! Draft state and validation shared by the add and edit forms.

use catalog_store::models::{MAX_ISBN_LEN, MAX_NAME_LEN, PUBLICATION_YEARS};
use catalog_store::{Book, BookCreate, BookUpdate};
use thiserror::Error;

/// Editable input of a book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    PublicationYear,
    Isbn,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Author,
        Field::PublicationYear,
        Field::Isbn,
    ];

    /// Form input name, matching the wire field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::PublicationYear => "publication_year",
            Field::Isbn => "isbn",
        }
    }
}

/// Raw text of a book form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publication_year: String,
    pub isbn: String,
}

impl BookDraft {
    /// Draft pre-filled from a stored record.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book
                .publication_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            isbn: book.isbn.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::PublicationYear => self.publication_year = value,
            Field::Isbn => self.isbn = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::PublicationYear => &self.publication_year,
            Field::Isbn => &self.isbn,
        }
    }

    /// Check the draft and shape it into a payload.
    ///
    /// The required-field check runs first so a blank form always reports it.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if title.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TitleTooLong);
        }
        if author.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::AuthorTooLong);
        }

        let publication_year = match self.publication_year.trim() {
            "" => None,
            raw => {
                let year: i32 = raw.parse().map_err(|_| ValidationError::YearNotNumber)?;
                if !PUBLICATION_YEARS.contains(&year) {
                    return Err(ValidationError::YearOutOfRange);
                }
                Some(year)
            }
        };

        let isbn = match self.isbn.trim() {
            "" => None,
            raw if raw.chars().count() > MAX_ISBN_LEN => return Err(ValidationError::IsbnTooLong),
            raw => Some(raw.to_string()),
        };

        Ok(ValidDraft {
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            isbn,
        })
    }
}

/// Why a draft cannot be submitted. The message is shown verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and author are required")]
    MissingRequired,
    #[error("Title must be at most 100 characters")]
    TitleTooLong,
    #[error("Author must be at most 100 characters")]
    AuthorTooLong,
    #[error("Publication year must be a number")]
    YearNotNumber,
    #[error("Publication year must be between 1000 and 2100")]
    YearOutOfRange,
    #[error("ISBN must be at most 13 characters")]
    IsbnTooLong,
}

/// A trimmed, checked draft ready to be sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub author: String,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
}

impl From<ValidDraft> for BookCreate {
    fn from(draft: ValidDraft) -> Self {
        BookCreate {
            title: draft.title,
            author: draft.author,
            publication_year: draft.publication_year,
            isbn: draft.isbn,
        }
    }
}

impl From<ValidDraft> for BookUpdate {
    fn from(draft: ValidDraft) -> Self {
        BookUpdate {
            title: Some(draft.title),
            author: Some(draft.author),
            publication_year: draft.publication_year,
            isbn: draft.isbn,
        }
    }
}
