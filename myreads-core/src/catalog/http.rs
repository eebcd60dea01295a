//! HTTP implementation of the catalog client

use super::{CatalogClient, SearchReply};
use crate::error::{CatalogError, Result};
use crate::types::{Book, Shelf};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The public books catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://reactnd-books-api.udacity.com";

/// Catalog client backed by the books REST API.
///
/// Every request carries the account token in the `Authorization` header;
/// the server partitions shelves per token.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct AllBooksBody {
    books: Vec<Book>,
}

#[derive(Deserialize)]
struct BookBody {
    book: Book,
}

/// `books` is a `Value` because search responses put either an array or an
/// error object there.
#[derive(Deserialize)]
struct SearchResultBody {
    #[serde(default)]
    books: Value,
}

#[derive(Serialize)]
struct UpdateBody {
    shelf: Shelf,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    query: &'a str,
}

impl HttpCatalog {
    /// Create a client for the catalog at `base_url`, authenticating as `token`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(resp: reqwest::Response, endpoint: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(CatalogError::Status {
                status: resp.status().as_u16(),
                endpoint: endpoint.to_string(),
            })
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<Book>> {
        tracing::debug!("fetching all shelved books");
        let resp = self
            .client
            .get(self.url("/books"))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?;
        let body: AllBooksBody = Self::decode(Self::check(resp, "/books")?).await?;
        Ok(body.books)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Book> {
        let endpoint = format!("/books/{}", id);
        let resp = self
            .client
            .get(self.url(&endpoint))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?;
        let body: BookBody = Self::decode(Self::check(resp, &endpoint)?).await?;
        Ok(body.book)
    }

    async fn update_shelf(&self, id: &str, shelf: Shelf) -> Result<()> {
        tracing::debug!(id, shelf = %shelf, "updating shelf assignment");
        let endpoint = format!("/books/{}", id);
        let resp = self
            .client
            .put(self.url(&endpoint))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.token)
            .json(&UpdateBody { shelf })
            .send()
            .await?;
        Self::check(resp, &endpoint)?;
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<SearchReply> {
        tracing::debug!(query, "searching catalog");
        let resp = self
            .client
            .post(self.url("/search"))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.token)
            .json(&SearchBody { query })
            .send()
            .await?;
        let body: SearchResultBody = Self::decode(Self::check(resp, "/search")?).await?;

        match serde_json::from_value::<Vec<Book>>(body.books) {
            Ok(books) => Ok(SearchReply::Books(books)),
            Err(_) => Ok(SearchReply::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let catalog = HttpCatalog::new("http://localhost:3000/", "token");
        assert_eq!(catalog.url("/books"), "http://localhost:3000/books");
    }
}
