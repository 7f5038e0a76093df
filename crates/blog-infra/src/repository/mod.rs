//! Blog post repository implementations.

mod memory;

pub use memory::InMemoryBlogPostRepository;
