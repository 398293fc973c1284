//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: i64,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Emptiness is the only validation; whitespace-only passes
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(input.email).map_err(|_| AuthError::MissingFields)?;

        // Salted slow hash before anything touches storage
        let password_hash = ClearTextPassword::new(input.password).hash()?;

        // The unique constraint on email is the duplicate check; the store
        // maps the violation to EmailTaken
        let user = self.repo.create(&email, &password_hash).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(RegisterOutput { user_id: user.id })
    }
}
