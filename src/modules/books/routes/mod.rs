//! Page handlers. Each request activates a fresh controller.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use catalog_http::error::AppError;
use catalog_store::{BookId, BookStore};
use serde::Deserialize;

use super::controllers::{CreateController, EditController, Field, ListController, Navigation};
use super::views;

type Store = Arc<dyn BookStore>;

/// Pages for the collection, add, edit and delete screens.
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/add", get(add_form).post(add_book))
        .route("/edit/{id}", get(edit_form).post(edit_book))
        .route("/delete/{id}", get(confirm_delete).post(delete_book))
        .with_state(store)
}

/// Form body posted by the add and edit pages.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publication_year: String,
    #[serde(default)]
    pub isbn: String,
}

impl BookForm {
    fn fields(self) -> [(Field, String); 4] {
        [
            (Field::Title, self.title),
            (Field::Author, self.author),
            (Field::PublicationYear, self.publication_year),
            (Field::Isbn, self.isbn),
        ]
    }
}

fn navigate(navigation: Navigation, stay: impl FnOnce() -> Html<String>) -> Response {
    match navigation {
        Navigation::Collection => Redirect::to("/").into_response(),
        Navigation::Stay => stay().into_response(),
    }
}

async fn list_books(State(store): State<Store>) -> Html<String> {
    let mut list = ListController::new(store);
    list.load().await;
    views::list_page(&list)
}

async fn add_form(State(store): State<Store>) -> Html<String> {
    views::create_page(&CreateController::new(store))
}

async fn add_book(State(store): State<Store>, Form(form): Form<BookForm>) -> Response {
    let mut controller = CreateController::new(store);
    for (field, value) in form.fields() {
        controller.set_field(field, value);
    }

    let navigation = controller.submit().await;
    navigate(navigation, || views::create_page(&controller))
}

async fn edit_form(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let mut controller = EditController::new(store, id);
    controller.load().await;
    Ok(views::edit_page(&controller))
}

/// Re-activates the edit screen for `id`, then applies the posted form to it.
async fn edit_book(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
    Form(form): Form<BookForm>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let mut controller = EditController::new(store, id);
    controller.load().await;
    for (field, value) in form.fields() {
        controller.set_field(field, value);
    }

    let navigation = controller.submit().await;
    Ok(navigate(navigation, || views::edit_page(&controller)))
}

async fn confirm_delete(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let mut list = ListController::new(store);
    list.load().await;

    if list.error().is_some() {
        return Ok(views::list_page(&list));
    }
    match list.request_delete(id) {
        Some(book) => Ok(views::confirm_delete_page(book)),
        None => Err(AppError::not_found(format!("Book {id} is not in the collection"))),
    }
}

/// Deletion after the confirmation page was accepted.
async fn delete_book(
    State(store): State<Store>,
    id: Result<Path<BookId>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let mut list = ListController::new(store);
    list.load().await;

    if list.error().is_none() && list.request_delete(id).is_none() {
        return Err(AppError::not_found(format!("Book {id} is not in the collection")));
    }
    list.confirm_delete().await;
    Ok(views::list_page(&list))
}
