//! Post Entity

use chrono::{DateTime, Utc};

/// Post entity
///
/// Title and content are mutable through update; id and created_at are
/// assigned at insert and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Database-assigned identifier
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Assigned by the store at insert time
    pub created_at: DateTime<Utc>,
}
