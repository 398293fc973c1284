//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;

// ============================================================================
// Create / Update
// ============================================================================

/// Request body shared by create and update
#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

/// Create response: the created post including its assigned id.
/// `created_at` is intentionally absent, matching the API contract.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

// ============================================================================
// List
// ============================================================================

/// One element of the public list response
#[derive(Debug, Clone, Serialize)]
pub struct PostListItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostListItem {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

// ============================================================================
// Update / Delete confirmations
// ============================================================================

/// Success confirmation; update and delete return a message,
/// not the mutated entity.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
