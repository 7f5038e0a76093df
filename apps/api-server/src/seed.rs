//! Sample posts loaded into a fresh store.

use chrono::NaiveDate;
use thiserror::Error;

use blog_core::domain::{BlogPost, BlogPostDraft};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

/// (title, content, author, publish date)
type Sample = (&'static str, &'static str, &'static str, &'static str);

const SAMPLES: [Sample; 3] = [
    (
        "Getting Started with Blogging",
        "A short guide to writing your very first post.",
        "Jane Doe",
        "2019-01-14",
    ),
    (
        "Ten Tips for Better Titles",
        "Short, specific and honest titles get read.",
        "John Smith",
        "2019-01-21",
    ),
    (
        "Why Drafts Matter",
        "Nobody writes a good first draft. Revise early and often.",
        "Jane Doe",
        "2019-01-25",
    ),
];

/// Seeding failures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid publish date {date:?} for sample post {title:?}: {source}")]
    InvalidDate {
        title: &'static str,
        date: &'static str,
        source: chrono::ParseError,
    },

    #[error("Failed to store sample post: {0}")]
    Repo(#[from] RepoError),
}

fn drafts(samples: &[Sample]) -> Result<Vec<BlogPostDraft>, SeedError> {
    samples
        .iter()
        .map(|&(title, content, author, date)| {
            date.parse::<NaiveDate>()
                .map(|publish_date| BlogPostDraft {
                    title: title.to_string(),
                    content: content.to_string(),
                    author: author.to_string(),
                    publish_date,
                })
                .map_err(|source| SeedError::InvalidDate {
                    title,
                    date,
                    source,
                })
        })
        .collect()
}

/// Append the sample posts to `repo`, returning how many were added.
///
/// Nothing is stored unless every sample is valid.
pub async fn seed_sample_posts(repo: &dyn BlogPostRepository) -> Result<usize, SeedError> {
    let drafts = drafts(&SAMPLES)?;
    let count = drafts.len();

    for draft in drafts {
        repo.insert(BlogPost::new(draft)).await?;
    }

    tracing::info!(count, "Seeded sample blog posts");
    Ok(count)
}
