//! Batch internal-linking orchestration over a post repository.

use tracing::{info, warn};

use crate::linking::{find_related_posts, inject_internal_links, DEFAULT_RELATED_LIMIT};
use crate::store::{PostRepository, StoreError};
use crate::types::{BatchLinkError, BatchLinkReport, Post};

/// For each id: load the post, compute related posts against the published
/// pool, inject links, and persist when anything was added.
///
/// One post's failure is recorded and does not stop the rest of the batch;
/// only the initial pool query propagates as an error. Posts are handled
/// sequentially so no two writes can race on the same id.
pub async fn batch_add_internal_links(
    repo: &dyn PostRepository,
    post_ids: &[String],
) -> Result<BatchLinkReport, StoreError> {
    let pool = repo.find_published().await?;
    info!(
        "Batch internal linking: {} posts against a pool of {}",
        post_ids.len(),
        pool.len()
    );

    let mut report = BatchLinkReport::default();
    for post_id in post_ids {
        match link_one(repo, &pool, post_id).await {
            Ok(links_added) => {
                report.processed += 1;
                report.links_added += links_added;
            }
            Err(e) => {
                warn!("Internal linking failed for {}: {}", post_id, e);
                report.errors.push(BatchLinkError {
                    post_id: post_id.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Batch internal linking done: {} processed, {} links added, {} errors",
        report.processed,
        report.links_added,
        report.errors.len()
    );
    Ok(report)
}

async fn link_one(
    repo: &dyn PostRepository,
    pool: &[Post],
    post_id: &str,
) -> Result<usize, StoreError> {
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;

    if !post.is_published() {
        return Ok(0);
    }

    let related = find_related_posts(&post, pool, DEFAULT_RELATED_LIMIT);
    let result = inject_internal_links(&post.content, &related, DEFAULT_RELATED_LIMIT);

    if result.links_added > 0 {
        repo.save_content(post_id, &result.content).await?;
    }
    Ok(result.links_added)
}
