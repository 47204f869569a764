//! Paginated collections.
//!
//! List endpoints answer with a page of items plus `links` and `meta` blocks.
//! [`Paginated`] wraps such a page together with the client that fetched it,
//! so the caller can walk the collection by following `links.next`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::api::ApiClient;
use crate::de::nullable;
use crate::error::{Error, Result};
use crate::request::RequestOptions;

/// Navigation links of a page. Absent links are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseLinks {
    /// First page
    #[serde(default, deserialize_with = "nullable")]
    pub first: String,
    /// Last page
    #[serde(default, deserialize_with = "nullable")]
    pub last: String,
    /// Previous page
    #[serde(default, deserialize_with = "nullable")]
    pub prev: String,
    /// Next page
    #[serde(default, deserialize_with = "nullable")]
    pub next: String,
}

/// Position of a page within its collection. Absent values are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Number of this page, starting at 1
    #[serde(default, deserialize_with = "nullable")]
    pub current_page: u64,
    /// Index of the first item of this page
    #[serde(default, deserialize_with = "nullable")]
    pub from: u64,
    /// Number of the last page
    #[serde(default, deserialize_with = "nullable")]
    pub last_page: u64,
    /// Collection URL
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    /// Page size
    #[serde(default, deserialize_with = "nullable")]
    pub per_page: u64,
    /// Index of the last item of this page
    #[serde(default, deserialize_with = "nullable")]
    pub to: u64,
    /// Size of the collection
    #[serde(default, deserialize_with = "nullable")]
    pub total: u64,
}

impl ResponseMeta {
    /// URL of the page this meta describes, when both path and page number
    /// are known.
    #[must_use]
    pub fn self_url(&self) -> Option<String> {
        if self.path.is_empty() || self.current_page == 0 {
            return None;
        }
        Some(format!("{}?page={}", self.path, self.current_page))
    }
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items of this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Navigation links
    #[serde(default, deserialize_with = "nullable")]
    pub links: ResponseLinks,
    /// Position within the collection
    #[serde(default, deserialize_with = "nullable")]
    pub meta: ResponseMeta,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            links: ResponseLinks::default(),
            meta: ResponseMeta::default(),
        }
    }
}

/// A page of a collection, able to fetch the pages after it.
///
/// A failed [`advance`](Self::advance) keeps the current page, stores the
/// error for [`err`](Self::err) and stops the walk.
pub struct Paginated<T> {
    page: Page<T>,
    client: ApiClient,
    error: Option<Error>,
}

impl<T> Paginated<T> {
    pub(crate) fn new(page: Page<T>, client: ApiClient) -> Self {
        Self {
            page,
            client,
            error: None,
        }
    }

    /// Items of the current page.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.page.data
    }

    /// Links of the current page.
    #[must_use]
    pub const fn links(&self) -> &ResponseLinks {
        &self.page.links
    }

    /// Meta of the current page.
    #[must_use]
    pub const fn meta(&self) -> &ResponseMeta {
        &self.page.meta
    }

    /// The current page.
    #[must_use]
    pub const fn page(&self) -> &Page<T> {
        &self.page
    }

    /// Drop the cursor, keeping the current page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        self.page
    }

    /// Drop the cursor, keeping the items of the current page.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.page.data
    }

    /// Returns true while a next page exists and no error occurred.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.error.is_none() && !self.page.links.next.is_empty()
    }

    /// Error of the last failed [`advance`](Self::advance), if any.
    #[must_use]
    pub const fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

impl<T> Paginated<T>
where
    T: DeserializeOwned,
{
    /// Replace the current page with the next one.
    ///
    /// Returns false when there is no next page or fetching it failed; in
    /// the latter case the error is available from [`err`](Self::err).
    pub async fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }

        let next = self.page.links.next.clone();
        match self.client.fetch_page(&next, &RequestOptions::new()).await {
            Ok(page) => {
                self.page = page;
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Collect the items of the current page and of every page after it.
    ///
    /// Stops when there is no next page or when the server links back to a
    /// page already visited, the starting page included.
    ///
    /// # Errors
    ///
    /// Returns the first error met while fetching a page.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = std::mem::take(&mut self.page.data);
        let mut visited: HashSet<String> = self.page.meta.self_url().into_iter().collect();
        let mut pages: HashSet<u64> = HashSet::new();
        if self.page.meta.current_page > 0 {
            pages.insert(self.page.meta.current_page);
        }

        while self.has_next() {
            if !visited.insert(self.page.links.next.clone()) {
                break;
            }
            if !self.advance().await {
                break;
            }
            let current = self.page.meta.current_page;
            if current > 0 && !pages.insert(current) {
                break;
            }
            items.append(&mut self.page.data);
        }

        match self.error {
            Some(err) => Err(err),
            None => Ok(items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Paginated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginated")
            .field("page", &self.page)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for Paginated<T> {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page && self.error == other.error
    }
}

impl<T: Serialize> Serialize for Paginated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.page.serialize(serializer)
    }
}
