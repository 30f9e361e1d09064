// ============================================================================
// STELLAR-HORIZON - Pages
// ============================================================================
// Horizon collections come back as HAL documents:
//   { "_embedded": { "records": [...] }, "_links": { "next": {...}, ... } }
// A page is a detached snapshot; following a link issues a fresh GET.
// ============================================================================

use crate::error::HorizonError;
use crate::fetcher::Fetcher;
use crate::metadata::{HorizonResponse, RateLimit};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// A HAL link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// The link as a URL, with any `{?cursor,limit}` template suffix removed
    pub fn url(&self) -> Result<Url> {
        let href = match (self.templated, self.href.find('{')) {
            (true, Some(idx)) => &self.href[..idx],
            _ => self.href.as_str(),
        };
        Url::parse(href)
            .map_err(|e| HorizonError::protocol(format!("Invalid link {:?}: {}", self.href, e)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub prev: Option<Link>,
    #[serde(default, rename = "self")]
    pub self_link: Option<Link>,
}

/// One slice of a resource collection
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub links: PageLinks,
    pub rate_limit: RateLimit,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_link(&self) -> Option<&Link> {
        self.links.next.as_ref()
    }

    pub fn prev_link(&self) -> Option<&Link> {
        self.links.prev.as_ref()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T: DeserializeOwned + Send> Page<T> {
    /// Fetch the page after this one.
    ///
    /// `Ok(None)` when this page carries no `next` link.
    pub async fn next_page(&self, fetcher: &Fetcher) -> Result<Option<Page<T>>> {
        follow(self.links.next.as_ref(), fetcher).await
    }

    /// Fetch the page before this one.
    ///
    /// `Ok(None)` when this page carries no `prev` link.
    pub async fn prev_page(&self, fetcher: &Fetcher) -> Result<Option<Page<T>>> {
        follow(self.links.prev.as_ref(), fetcher).await
    }
}

async fn follow<T: DeserializeOwned + Send>(
    link: Option<&Link>,
    fetcher: &Fetcher,
) -> Result<Option<Page<T>>> {
    match link {
        Some(link) => {
            let url = link.url()?;
            fetcher.fetch::<Page<T>>(&url).await.map(Some)
        }
        None => Ok(None),
    }
}

impl<T: DeserializeOwned + Send> HorizonResponse for Page<T> {
    fn attach_rate_limit(&mut self, rate_limit: RateLimit) {
        self.rate_limit = rate_limit;
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Embedded<R> {
            #[serde(default = "Vec::new")]
            records: Vec<R>,
        }

        #[derive(Deserialize)]
        struct Hal<R> {
            #[serde(rename = "_embedded")]
            embedded: Embedded<R>,
            #[serde(rename = "_links", default)]
            links: PageLinks,
        }

        let hal = Hal::<T>::deserialize(deserializer)?;
        Ok(Page {
            records: hal.embedded.records,
            links: hal.links,
            rate_limit: RateLimit::default(),
        })
    }
}
