use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog post entity.
///
/// Serialized with camelCase keys, so `publish_date` goes over the wire as
/// `publishDate` in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: NaiveDate,
}

/// The client-controlled fields of a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: NaiveDate,
}

impl BlogPost {
    /// Create a new post with a freshly generated ID.
    pub fn new(draft: BlogPostDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub fn with_id(id: Uuid, draft: BlogPostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            publish_date: draft.publish_date,
        }
    }

    /// Replace every field except the ID.
    pub fn replace(&mut self, draft: BlogPostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.publish_date = draft.publish_date;
    }
}
