//! In-process `/books` backend used to exercise the client against real HTTP.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use catalog_store::{Book, BookCreate, BookId, BookUpdate};

#[derive(Default)]
struct Shelf {
    next_id: BookId,
    books: BTreeMap<BookId, Book>,
}

type SharedShelf = Arc<Mutex<Shelf>>;

/// Start the backend on an ephemeral port and return its base URL.
pub async fn spawn_backend() -> String {
    let shelf = SharedShelf::default();
    let app = Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(shelf);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn list_books(State(shelf): State<SharedShelf>) -> Json<Vec<Book>> {
    Json(shelf.lock().unwrap().books.values().cloned().collect())
}

async fn get_book(
    State(shelf): State<SharedShelf>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, StatusCode> {
    shelf
        .lock()
        .unwrap()
        .books
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_book(
    State(shelf): State<SharedShelf>,
    Json(payload): Json<BookCreate>,
) -> (StatusCode, Json<Book>) {
    let mut shelf = shelf.lock().unwrap();
    shelf.next_id += 1;
    let book = Book {
        id: shelf.next_id,
        title: payload.title,
        author: payload.author,
        publication_year: payload.publication_year,
        isbn: payload.isbn,
    };
    shelf.books.insert(book.id, book.clone());
    (StatusCode::CREATED, Json(book))
}

async fn update_book(
    State(shelf): State<SharedShelf>,
    Path(id): Path<BookId>,
    Json(payload): Json<BookUpdate>,
) -> Result<Json<Book>, StatusCode> {
    let mut shelf = shelf.lock().unwrap();
    let book = shelf.books.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    book.apply(payload);
    Ok(Json(book.clone()))
}

async fn delete_book(State(shelf): State<SharedShelf>, Path(id): Path<BookId>) -> StatusCode {
    match shelf.lock().unwrap().books.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
