use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostDraft};
use crate::error::RepoError;

/// Blog post store.
///
/// Implementations keep posts in insertion order and never hand out two live
/// posts with the same ID.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Assign a fresh ID to `draft`, append it and return the stored post.
    async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, RepoError>;

    /// Append a post that already carries an ID.
    ///
    /// Fails with [`RepoError::Constraint`] if the ID is taken.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Replace the fields of the post with `id`, keeping its ID and position.
    ///
    /// Fails with [`RepoError::NotFound`] if no post matches.
    async fn update(&self, id: Uuid, draft: BlogPostDraft) -> Result<BlogPost, RepoError>;

    /// Remove the post with `id`. Returns whether a post was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
}
