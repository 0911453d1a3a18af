//! Pagination helpers for API requests
//!
//! GitHub list endpoints return one page at a time and advertise the next
//! page through the `Link` response header. [`collect_all`] follows those
//! links until the collection is exhausted.

use std::future::Future;

use log::debug;

/// Page size requested for every list call (GitHub maximum)
pub const PER_PAGE: usize = 100;

/// Opaque continuation for the next page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(String);

impl PageToken {
    /// Wrap a next-page URL
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// URL to request for the next page
    pub fn as_url(&self) -> &str {
        &self.0
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in API order
    pub items: Vec<T>,
    /// Continuation, absent on the last page
    pub next: Option<PageToken>,
}

impl<T> Page<T> {
    /// A page with a continuation
    pub fn new(items: Vec<T>, next: Option<PageToken>) -> Self {
        Self { items, next }
    }

    /// The final page of a listing
    #[cfg(test)]
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Check if there are more pages to fetch.
    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }
}

/// Fetch every page of a listing and concatenate the items in page order.
///
/// The first call receives `None`; each following call receives the token
/// from the previous page. The first error aborts the walk and is returned
/// on its own.
pub async fn collect_all<T, E, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<PageToken>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut all_items = Vec::new();
    let mut token = None;
    let mut pages = 0usize;

    loop {
        let page = fetch_page(token.take()).await?;
        pages += 1;
        all_items.extend(page.items);

        match page.next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    debug!("Collected {} items across {} page(s)", all_items.len(), pages);
    Ok(all_items)
}

/// Extract the `rel="next"` URL from a `Link` header.
///
/// GitHub Link headers look like:
/// `<https://api.github.com/user/repos?page=2>; rel="next", <...?page=5>; rel="last"`
pub fn next_page_from_link(link_header: &str) -> Option<PageToken> {
    for part in link_header.split(',') {
        let mut url = None;
        let mut is_next = false;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(rel) = segment.strip_prefix("rel=") {
                is_next = rel.trim_matches('"').split_whitespace().any(|r| r == "next");
            }
        }

        if let (Some(url), true) = (url, is_next) {
            return Some(PageToken::new(url));
        }
    }

    None
}
