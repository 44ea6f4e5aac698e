use std::{fmt, time::Duration};

use indicatif::ProgressBar;
use reqwest::{
    Client, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{config::Config, types::Page};

/// Defensive per-request timeout; the provider specifies none.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a resource fetch. Always fatal to the running pipeline: there
/// is no retry or backoff anywhere, a non-success status aborts the session.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// The provider answered with a non-success HTTP status.
    Status(StatusCode),
    /// The response body did not have the expected shape.
    Shape(String),
    /// The response body failed to deserialize into the target type.
    Json(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "request failed: {}", err),
            FetchError::Status(status) => write!(f, "API returned {}", status),
            FetchError::Shape(what) => write!(f, "unexpected response shape: {}", what),
            FetchError::Json(err) => write!(f, "failed to decode response: {}", err),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Json(err)
    }
}

/// Authenticated Web API client for one session.
///
/// Owns the HTTP client, the API base URL from the session [`Config`], and
/// the bearer token, which is read-only once obtained.
pub struct ApiClient {
    http: Client,
    api_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &Config, token: String) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token,
        })
    }

    /// Retrieves every page of a paginated collection.
    ///
    /// The first request goes to `{api_url}/{path}` and carries the
    /// caller-supplied query parameters; every follow-up request goes to the
    /// provider-supplied `next` URL and carries none, since that URL already
    /// encodes them. Each response is unwrapped by `wrap_key` when given,
    /// read as a [`Page`], and its items appended in retrieval order. The
    /// loop ends when a page carries no `next` URL.
    ///
    /// When a progress spinner is supplied, its message is updated with the
    /// page count derived from the first page's `total` and `limit`.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or malformed page aborts
    /// the whole retrieval; partially fetched rows are discarded.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        query: &[(&str, &str)],
        wrap_key: Option<&str>,
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<T>, FetchError> {
        let mut rows: Vec<T> = Vec::new();
        let mut next_url = Some(format!("{}/{}", self.api_url, path));
        let mut first_call = true;
        let mut page_num: u64 = 0;
        let mut num_pages: Option<u64> = None;

        while let Some(url) = next_url {
            let body = self
                .get_json(&url, content_type, if first_call { query } else { &[] })
                .await?;
            let page: Page<T> = parse_page(body, wrap_key)?;

            if first_call {
                num_pages = expected_pages(&page);
                first_call = false;
            }

            page_num += 1;
            if let Some(pb) = progress {
                match num_pages {
                    Some(total) => pb.set_message(format!("Loaded page {} of {}", page_num, total)),
                    None => pb.set_message(format!("Loaded page {}", page_num)),
                }
            }

            rows.extend(page.items);
            next_url = page.next;
        }

        Ok(rows)
    }

    /// Retrieves a non-paginated collection in a single request.
    ///
    /// The payload (after unwrapping `wrap_key` when given) is read directly
    /// as the full list of rows; no `next` URL is consulted.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        query: &[(&str, &str)],
        wrap_key: Option<&str>,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{}", self.api_url, path);
        let body = self.get_json(&url, content_type, query).await?;
        parse_collection(body, wrap_key)
    }

    async fn get_json(
        &self,
        url: &str,
        content_type: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, FetchError> {
        let content_type = HeaderValue::from_str(content_type)
            .map_err(|_| FetchError::Shape(format!("invalid content type '{}'", content_type)))?;

        let mut request = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, content_type);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Interprets one response body as a page of a paginated collection.
///
/// When `wrap_key` is given the body must be an object carrying that key and
/// the page lives underneath it.
pub fn parse_page<T: DeserializeOwned>(
    body: Value,
    wrap_key: Option<&str>,
) -> Result<Page<T>, FetchError> {
    let inner = unwrap_body(body, wrap_key)?;
    Ok(serde_json::from_value(inner)?)
}

/// Interprets one response body as a complete, non-paginated collection.
pub fn parse_collection<T: DeserializeOwned>(
    body: Value,
    wrap_key: Option<&str>,
) -> Result<Vec<T>, FetchError> {
    let inner = unwrap_body(body, wrap_key)?;
    Ok(serde_json::from_value(inner)?)
}

fn unwrap_body(mut body: Value, wrap_key: Option<&str>) -> Result<Value, FetchError> {
    match wrap_key {
        Some(key) => match body.get_mut(key) {
            Some(inner) => Ok(inner.take()),
            None => Err(FetchError::Shape(format!(
                "response is missing wrapper key '{}'",
                key
            ))),
        },
        None => Ok(body),
    }
}

fn expected_pages<T>(page: &Page<T>) -> Option<u64> {
    match (page.total, page.limit) {
        (Some(total), Some(limit)) if limit > 0 => Some(total.div_ceil(limit)),
        _ => None,
    }
}
