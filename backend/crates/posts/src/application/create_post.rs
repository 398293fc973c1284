//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        // Emptiness is the only validation; whitespace-only passes
        if input.title.is_empty() || input.content.is_empty() {
            return Err(PostError::MissingFields);
        }

        let post = self.repo.insert(&input.title, &input.content).await?;

        tracing::info!(post_id = post.id, "Post created");

        Ok(post)
    }
}
