//! In-memory blog post store.
//!
//! Posts live in a `Vec` so that listing returns them in insertion order.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostDraft};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

/// In-memory blog post repository using an ordered `Vec` behind an async RwLock.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    fn position(posts: &[BlogPost], id: Uuid) -> Option<usize> {
        posts.iter().position(|p| p.id == id)
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        // IDs stay unique even across a v4 collision.
        let mut post = BlogPost::new(draft);
        while Self::position(&posts, post.id).is_some() {
            post.id = Uuid::new_v4();
        }

        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Blog post created");

        Ok(post)
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        if Self::position(&posts, post.id).is_some() {
            return Err(RepoError::Constraint(format!(
                "blog post {} already exists",
                post.id
            )));
        }

        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, "Blog post inserted");

        Ok(post)
    }

    async fn update(&self, id: Uuid, draft: BlogPostDraft) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        let index = Self::position(&posts, id).ok_or(RepoError::NotFound)?;
        let post = &mut posts[index];
        post.replace(draft);
        tracing::debug!(post_id = %id, "Blog post updated");

        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;

        if removed {
            tracing::debug!(post_id = %id, "Blog post deleted");
        } else {
            tracing::debug!(post_id = %id, "Delete of unknown blog post ignored");
        }

        Ok(removed)
    }
}
