//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, UpdatePostInput,
    UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{CreatePostResponse, MessageResponse, PostListItem, PostRequest};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// List (public)
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<PostAppState<R>>,
) -> PostResult<Json<Vec<PostListItem>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute().await?;

    Ok(Json(posts.into_iter().map(PostListItem::from).collect()))
}

// ============================================================================
// Create (protected)
// ============================================================================

/// POST /posts
pub async fn create_post<R>(
    State(state): State<PostAppState<R>>,
    Json(req): Json<PostRequest>,
) -> PostResult<Json<CreatePostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
    };

    let post = use_case.execute(input).await?;

    Ok(Json(CreatePostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
    }))
}

// ============================================================================
// Update (protected)
// ============================================================================

/// PUT /posts/{id}
pub async fn update_post<R>(
    State(state): State<PostAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<PostRequest>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let input = UpdatePostInput {
        id,
        title: req.title,
        content: req.content,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Post updated successfully".to_string(),
    }))
}

// ============================================================================
// Delete (protected)
// ============================================================================

/// DELETE /posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostAppState<R>>,
    Path(id): Path<i64>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(id).await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
