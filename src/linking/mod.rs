//! Related-post ranking and internal-link tooling.

pub mod analyze;
pub mod batch;
pub mod inject;
pub mod phrases;

use std::collections::HashMap;

use crate::store::PostRepository;
use crate::store::StoreError;
use crate::types::{MatchType, Post, RelatedPost};

pub use analyze::analyze_internal_links;
pub use batch::batch_add_internal_links;
pub use inject::inject_internal_links;

pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// Rank the posts in `pool` by relatedness to `post`.
///
/// Three tiers, highest first: shared tags (10 points per shared tag), same
/// category (flat 5), keyword similarity against title/excerpt (flat 2). A
/// candidate matched by a higher tier is not re-scored by a lower one. Ties
/// break toward the most recently published.
pub fn find_related_posts(post: &Post, pool: &[Post], limit: usize) -> Vec<RelatedPost> {
    let keywords = phrases::extract_keywords(&format!("{} {}", post.title, post.excerpt), 10);

    let tag_hits: Vec<&Post> = pool
        .iter()
        .filter(|c| c.id != post.id && shared_tag_count(post, c) > 0)
        .collect();
    let category_hits: Vec<&Post> = pool
        .iter()
        .filter(|c| c.id != post.id && same_category(post, c))
        .collect();
    let keyword_hits: Vec<&Post> = pool
        .iter()
        .filter(|c| c.id != post.id && keyword_match(c, &keywords))
        .collect();

    rank_candidates(post, &tag_hits, &category_hits, &keyword_hits, limit)
}

/// Store-backed variant: issues the three candidate lookups (by tag, by
/// category, by keyword) against the repository and merges them with the same
/// tier scoring as [`find_related_posts`].
pub async fn find_related_via_store(
    repo: &dyn PostRepository,
    post: &Post,
    limit: usize,
) -> Result<Vec<RelatedPost>, StoreError> {
    let keywords = phrases::extract_keywords(&format!("{} {}", post.title, post.excerpt), 10);

    let tag_hits = if post.tags.is_empty() {
        Vec::new()
    } else {
        repo.find_by_tags(&post.tags, &post.id).await?
    };
    let category_hits = match &post.category {
        Some(category) => repo.find_by_category(&category.id, &post.id).await?,
        None => Vec::new(),
    };
    let keyword_hits = if keywords.is_empty() {
        Vec::new()
    } else {
        repo.search_by_keywords(&keywords, &post.id).await?
    };

    let tag_refs: Vec<&Post> = tag_hits.iter().collect();
    let category_refs: Vec<&Post> = category_hits.iter().collect();
    let keyword_refs: Vec<&Post> = keyword_hits.iter().collect();

    Ok(rank_candidates(post, &tag_refs, &category_refs, &keyword_refs, limit))
}

fn rank_candidates(
    post: &Post,
    tag_hits: &[&Post],
    category_hits: &[&Post],
    keyword_hits: &[&Post],
    limit: usize,
) -> Vec<RelatedPost> {
    let mut selected: HashMap<String, RelatedPost> = HashMap::new();

    for candidate in tag_hits {
        let shared = shared_tag_count(post, candidate);
        if shared > 0 && !selected.contains_key(&candidate.id) {
            selected.insert(
                candidate.id.clone(),
                to_related(candidate, 10 * shared as u32, MatchType::Tags),
            );
        }
    }

    for candidate in category_hits {
        if !selected.contains_key(&candidate.id) {
            selected.insert(candidate.id.clone(), to_related(candidate, 5, MatchType::Category));
        }
    }

    for candidate in keyword_hits {
        if !selected.contains_key(&candidate.id) {
            selected.insert(candidate.id.clone(), to_related(candidate, 2, MatchType::Keywords));
        }
    }

    let mut related: Vec<RelatedPost> = selected.into_values().collect();
    related.sort_by(|a, b| {
        b.relevance_score
            .cmp(&a.relevance_score)
            .then_with(|| b.published_at.cmp(&a.published_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    related.truncate(limit);
    related
}

fn shared_tag_count(post: &Post, candidate: &Post) -> usize {
    post.tags
        .iter()
        .filter(|tag| {
            candidate
                .tags
                .iter()
                .any(|other| other.eq_ignore_ascii_case(tag))
        })
        .count()
}

fn same_category(post: &Post, candidate: &Post) -> bool {
    match (&post.category, &candidate.category) {
        (Some(a), Some(b)) => !a.id.is_empty() && a.id == b.id,
        _ => false,
    }
}

fn keyword_match(candidate: &Post, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let title = candidate.title.to_lowercase();
    let excerpt = candidate.excerpt.to_lowercase();
    keywords
        .iter()
        .any(|k| title.contains(k.as_str()) || excerpt.contains(k.as_str()))
}

fn to_related(post: &Post, relevance_score: u32, match_type: MatchType) -> RelatedPost {
    RelatedPost {
        id: post.id.clone(),
        title: post.title.clone(),
        slug: post.slug.clone(),
        tags: post.tags.clone(),
        category: post.category.clone(),
        excerpt: post.excerpt.clone(),
        reading_time: post.reading_time,
        published_at: post.published_at,
        relevance_score,
        match_type,
    }
}
