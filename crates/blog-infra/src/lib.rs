//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.

pub mod repository;

pub use repository::InMemoryBlogPostRepository;
