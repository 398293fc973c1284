//! User Entity
//!
//! A registered account: email plus the stored password hash. Users are
//! insert-only; there is no update or deletion path.

use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,
    /// Login email (unique)
    pub email: Email,
    /// Argon2id hash in PHC format
    pub password_hash: HashedPassword,
}
