use crate::cancel::CancelSignal;
use crate::error::{Result, StargazerError};
use crate::github::MAX_PAGE_SIZE;
use crate::models::{Page, StargazerRecord};
use std::future::Future;
use tracing::{debug, info};

/// Anything that can serve one cursor-paged slice of stargazers.
pub trait PageSource {
    fn fetch_page(
        &self,
        owner: &str,
        repo: &str,
        count: u32,
        cursor: Option<&str>,
        cancel: &CancelSignal,
    ) -> impl Future<Output = Result<Page>> + Send;
}

/// Page through `source` until `star_count` records are collected or a page
/// comes back short.
///
/// Pages are fetched one at a time since each request needs the previous
/// cursor. A short page ends the loop even when fewer than `star_count`
/// records exist. Any error from the source, `EmptyPage` included, aborts
/// the collection and the partial result is dropped.
pub async fn collect_stargazers<S>(
    source: &S,
    owner: &str,
    repo: &str,
    star_count: usize,
    cancel: &CancelSignal,
) -> Result<Vec<StargazerRecord>>
where
    S: PageSource,
{
    let mut remaining = star_count;
    let mut cursor: Option<String> = None;
    let mut stargazers = Vec::new();

    if remaining > 0 {
        info!(owner, repo, star_count, "Fetching stars...");
    }

    while remaining > 0 {
        if cancel.is_cancelled() {
            return Err(StargazerError::Cancelled);
        }

        let page_size = remaining.min(MAX_PAGE_SIZE as usize) as u32;

        debug!(owner, repo, page_size, cursor = ?cursor, "Requesting page");
        let page = source
            .fetch_page(owner, repo, page_size, cursor.as_deref(), cancel)
            .await?;

        let fetched = page.len();
        stargazers.extend(page.records);
        cursor = Some(page.cursor);

        info!(
            owner,
            repo,
            fetched,
            total = stargazers.len(),
            "Fetched {} stars",
            stargazers.len()
        );

        if fetched < page_size as usize {
            remaining = 0;
        } else {
            remaining = remaining.saturating_sub(fetched);
        }
    }

    Ok(stargazers)
}
