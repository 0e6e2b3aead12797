//! Plain-text views for the terminal.

use std::fmt::Write;

use catalog_app::controllers::{BookDraft, ListController, ListView};
use catalog_store::{Book, BookId};

pub fn list(list: &ListController) -> String {
    match list.view() {
        ListView::Loading => "Loading your book collection...\n".to_string(),
        ListView::Error { message } => format!("{message}\n"),
        ListView::Empty => "Your Library is Empty\n\
Start building your book collection by adding your first book:\n  \
catalog add --title <TITLE> --author <AUTHOR>\n"
            .to_string(),
        ListView::Populated(books) => {
            let mut out = format!("Book Collection\n{}\n", list.summary());
            for book in books {
                out.push('\n');
                out.push_str(&card(book));
            }
            out
        }
    }
}

fn card(book: &Book) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{}  {}", book.id, book.title);
    let _ = writeln!(out, "    Author: {}", book.author);
    if let Some(year) = book.publication_year {
        let _ = writeln!(out, "    Published: {year}");
    }
    if let Some(isbn) = &book.isbn {
        let _ = writeln!(out, "    ISBN: {isbn}");
    }
    out
}

pub fn draft(id: BookId, draft: &BookDraft) -> String {
    let mut out = format!("#{id}  {}\n    Author: {}\n", draft.title, draft.author);
    if !draft.publication_year.is_empty() {
        let _ = writeln!(out, "    Published: {}", draft.publication_year);
    }
    if !draft.isbn.is_empty() {
        let _ = writeln!(out, "    ISBN: {}", draft.isbn);
    }
    out
}
