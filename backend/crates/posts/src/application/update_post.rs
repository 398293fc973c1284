//! Update Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Update post use case
///
/// Replaces title and content only; id and created_at are immutable.
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<()> {
        if input.title.is_empty() || input.content.is_empty() {
            return Err(PostError::MissingFields);
        }

        // Zero affected rows is the "no such post" signal
        let changed = self
            .repo
            .update(input.id, &input.title, &input.content)
            .await?;

        if changed == 0 {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = input.id, "Post updated");

        Ok(())
    }
}
