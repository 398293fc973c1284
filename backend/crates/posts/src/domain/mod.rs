//! Domain Layer
//!
//! Post entity and repository trait.

pub mod entities;
pub mod repository;

pub use entities::Post;
pub use repository::PostRepository;
