//! Resource Requests
//!
//! `RequestBuilder<K>` accumulates path segments and query parameters for
//! one resource kind `K`, then `build()` consumes it into an immutable
//! [`ResourceRequest`] that can be executed exactly once.
//!
//! ```ignore
//! let page = server
//!     .transactions()
//!     .for_ledger(200000000000)
//!     .limit(50)
//!     .order(Order::Asc)
//!     .execute()
//!     .await?;
//! ```

mod resources;

pub use resources::{
    Accounts, Effects, Ledgers, Offers, Operations, OrderBook, Paths, Payments, Trades,
    Transactions,
};

use crate::error::HorizonError;
use crate::fetcher::Fetcher;
use crate::metadata::HorizonResponse;
use crate::Result;
use std::fmt;
use std::marker::PhantomData;
use url::Url;

/// A queryable Horizon resource.
pub trait ResourceKind {
    /// Path used when no filter sets its own segments
    const DEFAULT_SEGMENTS: &'static [&'static str];

    /// What `execute()` decodes the response into
    type Output: HorizonResponse;
}

/// Resource kinds whose collections accept `cursor`, `limit` and `order`.
///
/// ```
/// # use std::sync::Arc;
/// # use stellar_horizon::{MockTransport, Order, Server};
/// let server = Server::with_transport(
///     "https://horizon-testnet.stellar.org",
///     Arc::new(MockTransport::new()),
/// )
/// .unwrap();
///
/// let request = server.trades().cursor("now").limit(1).order(Order::Desc).build().unwrap();
/// assert_eq!(request.url().query(), Some("cursor=now&limit=1&order=desc"));
/// ```
///
/// The order book is a snapshot, so paging it does not compile:
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use stellar_horizon::{MockTransport, Server};
/// let server = Server::with_transport(
///     "https://horizon-testnet.stellar.org",
///     Arc::new(MockTransport::new()),
/// )
/// .unwrap();
///
/// let _ = server.order_book().limit(1);
/// ```
pub trait Paginated: ResourceKind {}

/// Sort direction of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RequestBuilder<K: ResourceKind> {
    fetcher: Fetcher,
    base: Url,
    segments: Vec<String>,
    segments_set: bool,
    query: Vec<(String, String)>,
    error: Option<HorizonError>,
    kind: PhantomData<K>,
}

impl<K: ResourceKind> RequestBuilder<K> {
    pub(crate) fn new(fetcher: Fetcher, base: Url) -> Self {
        Self {
            fetcher,
            base,
            segments: K::DEFAULT_SEGMENTS.iter().map(|s| s.to_string()).collect(),
            segments_set: false,
            query: Vec::new(),
            error: None,
            kind: PhantomData,
        }
    }

    /// Replace the default path with `segments`.
    ///
    /// Allowed once per builder. A second call is recorded and reported as
    /// `HorizonError::Configuration` by `build()` / `execute()`.
    pub fn set_path_segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if self.segments_set {
            if self.error.is_none() {
                self.error = Some(HorizonError::configuration(
                    "URL segments have been already added",
                ));
            }
            return self;
        }

        self.segments_set = true;
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Append a query parameter. Repeated keys are kept in call order.
    pub fn add_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub(crate) fn add_query_parameters(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Finalize into an immutable request.
    pub fn build(self) -> Result<ResourceRequest<K>> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let url = build_url(&self.base, &self.segments, &self.query)?;
        Ok(ResourceRequest {
            fetcher: self.fetcher,
            url,
            kind: PhantomData,
        })
    }

    /// Build and execute in one step.
    pub async fn execute(self) -> Result<K::Output> {
        self.build()?.execute().await
    }

    /// Fetch an arbitrary URL (typically a link from an earlier response)
    /// with this resource's output shape.
    pub async fn execute_url(&self, url: &Url) -> Result<K::Output> {
        self.fetcher.fetch(url).await
    }

    /// Build with this builder's segments, but decode a single record.
    pub(crate) async fn fetch_single<T: HorizonResponse>(self) -> Result<T> {
        let request = self.build()?;
        request.fetcher.fetch(&request.url).await
    }
}

impl<K: Paginated> RequestBuilder<K> {
    /// Start after this opaque paging token
    pub fn cursor(self, token: impl Into<String>) -> Self {
        self.add_query_parameter("cursor", token)
    }

    /// Maximum records per page; bounds are enforced by the server
    pub fn limit(self, number: u32) -> Self {
        self.add_query_parameter("limit", number.to_string())
    }

    pub fn order(self, direction: Order) -> Self {
        self.add_query_parameter("order", direction.as_str())
    }
}

impl<K: ResourceKind> fmt::Debug for RequestBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base", &self.base.as_str())
            .field("segments", &self.segments)
            .field("query", &self.query)
            .field("error", &self.error)
            .finish()
    }
}

/// A finalized request: its URL can no longer change.
pub struct ResourceRequest<K: ResourceKind> {
    fetcher: Fetcher,
    url: Url,
    kind: PhantomData<K>,
}

impl<K: ResourceKind> ResourceRequest<K> {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn execute(self) -> Result<K::Output> {
        self.fetcher.fetch(&self.url).await
    }
}

impl<K: ResourceKind> fmt::Debug for ResourceRequest<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRequest")
            .field("url", &self.url.as_str())
            .finish()
    }
}

/// base + escaped segments + query parameters in insertion order
fn build_url(base: &Url, segments: &[String], query: &[(String, String)]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            HorizonError::configuration(format!("{} cannot be used as a base URL", base))
        })?;
        path.pop_if_empty();
        path.extend(segments);
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
