//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> PostResult<()> {
        let changed = self.repo.delete(id).await?;

        if changed == 0 {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = id, "Post deleted");

        Ok(())
    }
}
