//! Posts Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::PostConfig;
use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostAppState};
use crate::presentation::middleware::{TokenGuard, require_bearer};

/// Create the posts router with PostgreSQL repository
pub fn post_router(repo: PgPostRepository, config: PostConfig) -> Router {
    post_router_generic(repo, config)
}

/// Create a generic posts router for any repository implementation
///
/// `GET /posts` is public; every mutation goes through the bearer-token
/// guard first.
pub fn post_router_generic<R>(repo: R, config: PostConfig) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostAppState {
        repo: Arc::new(repo),
    };
    let guard = TokenGuard {
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(axum::middleware::from_fn_with_state(guard, require_bearer))
        .with_state(state.clone());

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .with_state(state);

    public.merge(protected)
}
