//! HTML for each controller state.

use axum::response::Html;
use catalog_http::html::{escape, page};
use catalog_store::Book;

use super::controllers::{
    BookDraft, CreateController, EditController, EditView, Field, ListController, ListView,
};

pub fn list_page(list: &ListController) -> Html<String> {
    let body = match list.view() {
        ListView::Loading => {
            "<div class=\"loading\">Loading your book collection...</div>".to_string()
        }
        ListView::Error { message } => format!(
            "<div class=\"error\">{}<a href=\"/\" class=\"btn btn-primary\">🔄 Try Again</a></div>",
            escape(message)
        ),
        ListView::Empty => "<div class=\"empty-state\"><h2>📚 Your Library is Empty</h2>\
<p>Start building your book collection by adding your first book.</p>\
<a href=\"/add\" class=\"btn btn-primary btn-lg\">➕ Add Your First Book</a></div>"
            .to_string(),
        ListView::Populated(books) => {
            let cards: String = books.iter().map(book_card).collect();
            format!(
                "<div class=\"header-actions\"><div class=\"header-info\"><h1>Book Collection</h1>\
<p>{}</p></div><a href=\"/add\" class=\"btn btn-primary\">➕ Add New Book</a></div>\
<div class=\"book-grid\">{cards}</div>",
                list.summary()
            )
        }
    };
    page("Home", &body)
}

fn book_card(book: &Book) -> String {
    let mut card = format!(
        "<div class=\"book-card\"><h3>{}</h3><p><strong>Author:</strong> {}</p>",
        escape(&book.title),
        escape(&book.author)
    );
    if let Some(year) = book.publication_year {
        card.push_str(&format!("<p><strong>Published:</strong> {year}</p>"));
    }
    if let Some(isbn) = &book.isbn {
        card.push_str(&format!("<p><strong>ISBN:</strong> {}</p>", escape(isbn)));
    }
    card.push_str(&format!(
        "<div class=\"book-actions\">\
<a href=\"/edit/{id}\" class=\"btn btn-sm btn-secondary\">✏️ Edit</a>\
<a href=\"/delete/{id}\" class=\"btn btn-sm btn-danger\">🗑️ Delete</a></div></div>",
        id = book.id
    ));
    card
}

pub fn confirm_delete_page(book: &Book) -> Html<String> {
    let body = format!(
        "<div class=\"confirm\"><h1>Delete book</h1>\
<p>Are you sure you want to delete this book?</p><p><strong>{}</strong> by {}</p>\
<form method=\"post\" action=\"/delete/{}\" class=\"form-actions\">\
<a href=\"/\" class=\"btn btn-secondary\">← Cancel</a>\
<button type=\"submit\" class=\"btn btn-danger\">🗑️ Delete</button></form></div>",
        escape(&book.title),
        escape(&book.author),
        book.id
    );
    page("Delete Book", &body)
}

pub fn create_page(form: &CreateController) -> Html<String> {
    let submit_label = if form.loading() {
        "⏳ Adding..."
    } else {
        "➕ Add Book"
    };
    let body = format!(
        "<div class=\"header-actions\"><div class=\"header-info\"><h1>📚 Add New Book</h1>\
<p>Add a new book to your collection</p></div></div>{}",
        book_form("/add", form.draft(), form.error(), submit_label)
    );
    page("Add Book", &body)
}

pub fn edit_page(form: &EditController) -> Html<String> {
    let body = match form.view() {
        EditView::Loading => "<div class=\"loading\">Loading book details...</div>".to_string(),
        EditView::LoadFailed { message } => format!(
            "<div class=\"error\">{}<a href=\"/\" class=\"btn btn-primary\">← Back to Library</a></div>",
            escape(message)
        ),
        EditView::Form {
            draft,
            error,
            submitting,
        } => {
            let submit_label = if submitting {
                "⏳ Saving..."
            } else {
                "💾 Save Changes"
            };
            format!(
                "<div class=\"header-actions\"><div class=\"header-info\"><h1>✏️ Edit Book</h1>\
<p>Update book information</p></div></div>{}",
                book_form(&format!("/edit/{}", form.id()), draft, error, submit_label)
            )
        }
    };
    page("Edit Book", &body)
}

fn book_form(action: &str, draft: &BookDraft, error: Option<&str>, submit_label: &str) -> String {
    let inputs: String = Field::ALL
        .iter()
        .map(|field| form_group(*field, draft.get(*field)))
        .collect();
    let error = error
        .map(|message| format!("<div class=\"error\">{}</div>", escape(message)))
        .unwrap_or_default();

    format!(
        "<form method=\"post\" action=\"{}\" class=\"form\">{inputs}{error}\
<div class=\"form-actions\"><a href=\"/\" class=\"btn btn-secondary\">← Cancel</a>\
<button type=\"submit\" class=\"btn btn-primary\">{submit_label}</button></div></form>",
        escape(action)
    )
}

fn form_group(field: Field, value: &str) -> String {
    let (label, attributes) = match field {
        Field::Title => (
            "Book Title *",
            "type=\"text\" required maxlength=\"100\" placeholder=\"Enter the book title\"",
        ),
        Field::Author => (
            "Author *",
            "type=\"text\" required maxlength=\"100\" placeholder=\"Enter the author's name\"",
        ),
        Field::PublicationYear => (
            "Publication Year",
            "type=\"number\" min=\"1000\" max=\"2100\" placeholder=\"e.g., 2023\"",
        ),
        Field::Isbn => (
            "ISBN",
            "type=\"text\" maxlength=\"13\" placeholder=\"e.g., 9781234567890\"",
        ),
    };
    let name = field.name();

    format!(
        "<div class=\"form-group\"><label for=\"{name}\">{label}</label>\
<input id=\"{name}\" name=\"{name}\" {attributes} value=\"{}\"></div>",
        escape(value)
    )
}
