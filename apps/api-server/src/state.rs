//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::InMemoryBlogPostRepository;

use crate::seed::{self, SeedError};

/// Shared application state.
///
/// Every worker holds a clone, and all clones point at the same store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    /// Build the application state with a fresh in-memory store.
    pub async fn new(seed_sample_posts: bool) -> Result<Self, SeedError> {
        Self::with_repository(Arc::new(InMemoryBlogPostRepository::new()), seed_sample_posts).await
    }

    /// Build the application state around `posts`, seeding it if asked.
    ///
    /// A seeding failure is returned rather than serving a partial store.
    pub async fn with_repository(
        posts: Arc<dyn BlogPostRepository>,
        seed_sample_posts: bool,
    ) -> Result<Self, SeedError> {
        if seed_sample_posts {
            seed::seed_sample_posts(posts.as_ref()).await?;
        } else {
            tracing::info!("Sample posts disabled - starting with an empty store");
        }

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }
}
