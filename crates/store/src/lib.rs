//! Book record schema and the client for the remote book store.

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpBookStore;
pub use error::{FetchCause, FetchError, Operation, StoreResult};
pub use models::{Book, BookCreate, BookId, BookUpdate};
pub use reqwest::StatusCode;

/// Operations offered by the remote book store.
///
/// Any failure, whether transport, decoding or a non-success status, surfaces
/// as a [`FetchError`].
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every record in the collection.
    async fn list(&self) -> StoreResult<Vec<Book>>;

    /// Fetch one record by identifier.
    async fn get(&self, id: BookId) -> StoreResult<Book>;

    /// Submit a new record and return the canonical version with its assigned id.
    async fn create(&self, book: &BookCreate) -> StoreResult<Book>;

    /// Submit partial changes and return the updated record.
    async fn update(&self, id: BookId, book: &BookUpdate) -> StoreResult<Book>;

    /// Remove a record.
    async fn delete(&self, id: BookId) -> StoreResult<()>;
}
