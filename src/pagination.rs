//! Pagination loop shared by generated listing commands.
//!
//! Generated code adapts the client's per-page response into a [`Page`] and
//! delegates the fetch loop to [`collect`], so termination and failure
//! semantics live (and are tested) here rather than in rendered text.

use anyhow::bail;

/// Cursor passed to the underlying service operation for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number; 0 means unspecified, letting the server pick the first
    pub page: i64,
    pub per_page: i64,
}

/// One fetched page of results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// HTTP status of the response
    pub status: u16,
    /// Next page number reported by the response; 0 when exhausted
    pub next_page: i64,
}

/// Fetch pages starting at `start`, accumulating items in page order.
///
/// Fails the whole command immediately when a fetch reports an error or a
/// non-success status; nothing fetched so far is returned in that case.
/// Stops after the first page unless `all` is set, and otherwise follows
/// `next_page` until the response reports no further page.
pub fn collect<T, F>(start: PageQuery, all: bool, mut fetch: F) -> anyhow::Result<Vec<T>>
where
    F: FnMut(&PageQuery) -> anyhow::Result<Page<T>>,
{
    let mut query = start;
    let mut items = Vec::new();
    loop {
        let page = fetch(&query)?;
        if !(200..300).contains(&page.status) {
            bail!("request failed with status {}", page.status);
        }
        items.extend(page.items);
        if !all || page.next_page == 0 {
            break;
        }
        query.page = page.next_page;
    }
    Ok(items)
}
