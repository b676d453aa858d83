//! Transparent walking of multi-page list endpoints.
//!
//! Fireblocks list endpoints come in two families:
//!
//! - body-cursor pages, where the JSON object carries the records and a
//!   `nextUrl` field (vault accounts);
//! - header-cursor pages, where the body is a bare JSON array and the next
//!   pointer arrives in the `next-page` response header (transactions).
//!
//! [`PageShape`] hides the difference; [`FireblocksClient::collect_all`]
//! fetches pages one after another until a page comes back short, the
//! cursor runs out, or the cursor stops moving.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded;

use crate::error::FireblocksError;
use crate::rest::FireblocksClient;
use crate::rest::client::decode;

/// One decoded page: its records and the pointer to the next page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in server order
    pub items: Vec<T>,
    /// Raw next-page pointer (absolute URL or path), if any
    pub next: Option<String>,
}

/// A list response shape the walker knows how to split into a [`Page`].
pub trait PageShape: DeserializeOwned {
    /// The record type.
    type Item;

    /// Split the decoded body into records and the next-page pointer.
    ///
    /// `next_page_header` is the `next-page` response header, if sent.
    fn into_page(self, next_page_header: Option<String>) -> Page<Self::Item>;
}

/// A page whose body is a bare JSON array and whose cursor is the
/// `next-page` response header.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct HeaderPaged<T>(pub Vec<T>);

impl<T> PageShape for HeaderPaged<T>
where
    T: DeserializeOwned,
{
    type Item = T;

    fn into_page(self, next_page_header: Option<String>) -> Page<T> {
        Page {
            items: self.0,
            next: next_page_header,
        }
    }
}

/// Reduce a next-page pointer to a bare path and query.
///
/// The server may echo an absolute URL (including the API host) or a bare
/// path. Blank pointers mean there is no next page.
///
/// ```rust
/// use fireblocks_api_client::rest::normalize_cursor;
///
/// assert_eq!(
///     normalize_cursor("https://api.fireblocks.io/v1/transactions?after=123").as_deref(),
///     Some("/v1/transactions?after=123"),
/// );
/// assert_eq!(normalize_cursor("/v1/vault/accounts_paged?after=9").as_deref(), Some("/v1/vault/accounts_paged?after=9"));
/// assert_eq!(normalize_cursor("  "), None);
/// ```
pub fn normalize_cursor(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => {
            let mut path = url.path().to_string();
            if let Some(query) = url.query() {
                path.push('?');
                path.push_str(query);
            }
            Some(path)
        }
        _ if trimmed.starts_with('/') => Some(trimmed.to_string()),
        _ => Some(format!("/{trimmed}")),
    }
}

/// Append the fixed query to `cursor`, skipping keys the cursor already has.
///
/// The cursor's own query string is kept byte for byte, since it is echoed
/// from the server and becomes part of the signed URI.
pub(crate) fn merge_query(cursor: &str, fixed_query: &str) -> String {
    let (path, existing) = match cursor.split_once('?') {
        Some((path, query)) => (path, query),
        None => (cursor, ""),
    };

    let present: Vec<String> = form_urlencoded::parse(existing.as_bytes())
        .map(|(key, _)| key.into_owned())
        .collect();

    let mut extra = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(fixed_query.as_bytes()) {
        if !present.iter().any(|p| *p == key) {
            extra.append_pair(&key, &value);
        }
    }
    let extra = extra.finish();

    match (existing.is_empty(), extra.is_empty()) {
        (true, true) => path.to_string(),
        (true, false) => format!("{path}?{extra}"),
        (false, true) => format!("{path}?{existing}"),
        (false, false) => format!("{path}?{existing}&{extra}"),
    }
}

impl FireblocksClient {
    /// Fetch every page of a list endpoint and concatenate the records.
    ///
    /// Pages are fetched strictly in sequence; each cursor is only known
    /// once the previous page returns. The walk ends when a page holds fewer
    /// than `page_size` records, when a full page carries no next pointer, or
    /// when the pointer, once merged with `query`, repeats the page just
    /// fetched. Records keep server order and are not deduplicated. Any
    /// failure aborts the walk and the records gathered so far are dropped.
    ///
    /// # Arguments
    ///
    /// * `initial_path` - Path of the first page (e.g., "/v1/transactions")
    /// * `query` - Parameters sent with every page unless the cursor already has them
    /// * `page_size` - A page shorter than this is the last one
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::rest::{FireblocksClient, HeaderPaged};
    ///
    /// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let rows: Vec<serde_json::Value> = client
    ///     .collect_all::<HeaderPaged<serde_json::Value>, _>("/v1/transactions", &[("status", "COMPLETED")], 200)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collect_all<P, Q>(
        &self,
        initial_path: &str,
        query: &Q,
        page_size: usize,
    ) -> Result<Vec<P::Item>, FireblocksError>
    where
        P: PageShape,
        Q: Serialize + ?Sized,
    {
        let fixed_query =
            serde_urlencoded::to_string(query).map_err(|e| FireblocksError::Encode(e.to_string()))?;
        let mut cursor = normalize_cursor(initial_path)
            .ok_or_else(|| FireblocksError::Encode("empty list path".to_string()))?;

        let mut records = Vec::new();
        let mut page_number = 0usize;

        loop {
            let path = merge_query(&cursor, &fixed_query);
            let response = self.execute(Method::GET, &path, None).await?;
            let page: P = decode(&response.body)?;
            let Page { items, next } = page.into_page(response.next_page);

            page_number += 1;
            let count = items.len();
            tracing::debug!(page = page_number, records = count, path = %path, "fetched page");
            records.extend(items);

            if count < page_size {
                break;
            }

            match next.as_deref().and_then(normalize_cursor) {
                Some(next) if merge_query(&next, &fixed_query) == path => {
                    tracing::warn!(path = %path, "next-page pointer did not advance, stopping");
                    break;
                }
                Some(next) => cursor = next,
                None => {
                    tracing::warn!(
                        path = %path,
                        records = count,
                        "full page without next-page pointer, stopping"
                    );
                    break;
                }
            }
        }

        Ok(records)
    }
}
