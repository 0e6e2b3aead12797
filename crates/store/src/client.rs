//! reqwest implementation of [`BookStore`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use catalog_kernel::settings::ApiSettings;

use crate::error::{FetchError, Operation, StoreResult};
use crate::models::{Book, BookCreate, BookId, BookUpdate};
use crate::BookStore;

/// REST client for the `/books` resource of the remote store.
///
/// Every call is a single attempt: no retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct HttpBookStore {
    client: Client,
    books_url: String,
}

impl HttpBookStore {
    /// Create a client rooted at `base_url`; a trailing `/` is ignored.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            books_url: format!("{}/books", base),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(&settings.base_url)
    }

    /// URL of the collection resource.
    pub fn books_url(&self) -> &str {
        &self.books_url
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/{}", self.books_url, id)
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> StoreResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::new(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%operation, status = status.as_u16(), "store rejected request");
            return Err(FetchError::status(operation, status));
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> StoreResult<T> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(operation, e))
    }
}

#[async_trait]
impl BookStore for HttpBookStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        tracing::debug!(url = %self.books_url, "GET books");
        self.send_json(Operation::List, self.client.get(&self.books_url))
            .await
    }

    async fn get(&self, id: BookId) -> StoreResult<Book> {
        let url = self.book_url(id);
        tracing::debug!(%url, book_id = id, "GET book");
        self.send_json(Operation::Get, self.client.get(url)).await
    }

    async fn create(&self, book: &BookCreate) -> StoreResult<Book> {
        tracing::debug!(url = %self.books_url, "POST book");
        // `.json()` declares `Content-Type: application/json`.
        self.send_json(Operation::Create, self.client.post(&self.books_url).json(book))
            .await
    }

    async fn update(&self, id: BookId, book: &BookUpdate) -> StoreResult<Book> {
        let url = self.book_url(id);
        tracing::debug!(%url, book_id = id, "PUT book");
        self.send_json(Operation::Update, self.client.put(url).json(book))
            .await
    }

    async fn delete(&self, id: BookId) -> StoreResult<()> {
        let url = self.book_url(id);
        tracing::debug!(%url, book_id = id, "DELETE book");
        self.send(Operation::Delete, self.client.delete(url))
            .await
            .map(|_| ())
    }
}
