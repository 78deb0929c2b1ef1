//! Storage port for the linking orchestration.
//!
//! The analyzers never talk to storage themselves; everything that does goes
//! through [`PostRepository`] so the real document store stays an external
//! collaborator. [`MemoryRepository`] backs the HTTP service and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::{Post, PostStatus};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// All posts with published status.
    async fn find_published(&self) -> Result<Vec<Post>, StoreError>;

    /// Published posts sharing at least one of `tags`, excluding `exclude_id`.
    async fn find_by_tags(&self, tags: &[String], exclude_id: &str)
        -> Result<Vec<Post>, StoreError>;

    /// Published posts in the given category, excluding `exclude_id`.
    async fn find_by_category(
        &self,
        category_id: &str,
        exclude_id: &str,
    ) -> Result<Vec<Post>, StoreError>;

    /// Published posts whose title or excerpt contains any keyword,
    /// case-insensitive, excluding `exclude_id`.
    async fn search_by_keywords(
        &self,
        keywords: &[String],
        exclude_id: &str,
    ) -> Result<Vec<Post>, StoreError>;

    async fn save_content(&self, id: &str, content: &str) -> Result<(), StoreError>;
}

/// In-memory repository keyed by post id.
#[derive(Default)]
pub struct MemoryRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        let map = posts.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { posts: RwLock::new(map) }
    }

    pub async fn insert(&self, post: Post) {
        self.posts.write().await.insert(post.id.clone(), post);
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    async fn published_matching<F>(&self, exclude_id: &str, pred: F) -> Vec<Post>
    where
        F: Fn(&Post) -> bool,
    {
        let mut hits: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.status == PostStatus::Published && p.id != exclude_id && pred(p))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits
    }
}

#[async_trait]
impl PostRepository for MemoryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn find_published(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.published_matching("", |_| true).await)
    }

    async fn find_by_tags(
        &self,
        tags: &[String],
        exclude_id: &str,
    ) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .published_matching(exclude_id, |p| {
                p.tags
                    .iter()
                    .any(|t| tags.iter().any(|q| q.eq_ignore_ascii_case(t)))
            })
            .await)
    }

    async fn find_by_category(
        &self,
        category_id: &str,
        exclude_id: &str,
    ) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .published_matching(exclude_id, |p| {
                p.category
                    .as_ref()
                    .is_some_and(|c| !c.id.is_empty() && c.id == category_id)
            })
            .await)
    }

    async fn search_by_keywords(
        &self,
        keywords: &[String],
        exclude_id: &str,
    ) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .published_matching(exclude_id, |p| {
                let title = p.title.to_lowercase();
                let excerpt = p.excerpt.to_lowercase();
                keywords
                    .iter()
                    .any(|k| title.contains(&k.to_lowercase()) || excerpt.contains(&k.to_lowercase()))
            })
            .await)
    }

    async fn save_content(&self, id: &str, content: &str) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(id) {
            Some(post) => {
                post.content = content.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
