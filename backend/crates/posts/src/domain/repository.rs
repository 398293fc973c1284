//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Post;
use crate::error::PostResult;

/// Post repository trait (the post store)
///
/// Mutations return the number of affected rows; zero signals "no such
/// post" in lieu of a dedicated existence check.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a post; id and created_at are store-assigned
    async fn insert(&self, title: &str, content: &str) -> PostResult<Post>;

    /// All posts, newest first, fully materialized
    async fn list_all(&self) -> PostResult<Vec<Post>>;

    /// Replace title and content; returns affected row count
    async fn update(&self, id: i64, title: &str, content: &str) -> PostResult<u64>;

    /// Delete by id; returns affected row count
    async fn delete(&self, id: i64) -> PostResult<u64>;
}
