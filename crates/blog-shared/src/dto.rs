//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a blog post.
///
/// `publishDate` may be omitted, in which case the server uses today's date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
}

/// Request to replace a blog post.
///
/// The path ID is authoritative; a body `id`, when present, must match it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: NaiveDate,
}
