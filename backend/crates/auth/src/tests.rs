//! Unit tests for the auth crate
//!
//! Use cases are exercised against an in-memory credential store; the
//! Postgres implementation is only wired up at runtime.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use platform::password::HashedPassword;
use platform::token;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory credential store with the same duplicate-email semantics
/// as the Postgres unique constraint.
#[derive(Clone, Default)]
struct MemUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for MemUserRepository {
    async fn create(&self, email: &Email, password_hash: &HashedPassword) -> AuthResult<User> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == *email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: users.len() as i64 + 1,
            email: email.clone(),
            password_hash: password_hash.clone(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::new(b"test-secret".to_vec()))
}

fn register_input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_succeeds() {
    let repo = Arc::new(MemUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone());

    let output = use_case
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();
    assert_eq!(output.user_id, 1);

    // Stored hash is not the plaintext
    let user = repo
        .find_by_email(&Email::new("a@b.com").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_ne!(user.password_hash.as_phc_string(), "secret");
}

#[tokio::test]
async fn test_register_duplicate_email_fails() {
    let repo = Arc::new(MemUserRepository::default());
    let use_case = RegisterUseCase::new(repo);

    use_case
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();

    let err = use_case
        .execute(register_input("a@b.com", "other"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn test_register_empty_fields_rejected() {
    let repo = Arc::new(MemUserRepository::default());
    let use_case = RegisterUseCase::new(repo);

    let err = use_case
        .execute(register_input("", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingFields));

    let err = use_case
        .execute(register_input("a@b.com", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingFields));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let repo = Arc::new(MemUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone())
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();

    let output = LoginUseCase::new(repo, config.clone())
        .execute(login_input("a@b.com", "secret"))
        .await
        .unwrap();

    let claims = token::verify(&output.token, &config.token_secret).unwrap();
    assert_eq!(claims.user_id, 1);
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let repo = Arc::new(MemUserRepository::default());

    RegisterUseCase::new(repo.clone())
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();

    let err = LoginUseCase::new(repo, test_config())
        .execute(login_input("a@b.com", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_email_rejected() {
    let repo = Arc::new(MemUserRepository::default());

    let err = LoginUseCase::new(repo, test_config())
        .execute(login_input("nobody@b.com", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_token_valid_one_hour() {
    let repo = Arc::new(MemUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone())
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();

    let output = LoginUseCase::new(repo, config.clone())
        .execute(login_input("a@b.com", "secret"))
        .await
        .unwrap();

    let issued_at = token::unix_now();
    let secret = &config.token_secret;

    assert!(token::verify_at(&output.token, secret, issued_at + 59 * 60).is_ok());
    assert!(matches!(
        token::verify_at(&output.token, secret, issued_at + 61 * 60),
        Err(token::TokenError::Expired)
    ));
}

#[tokio::test]
async fn test_empty_password_login_path() {
    // Registration rejects empty passwords, but login must not panic on one
    let repo = Arc::new(MemUserRepository::default());

    RegisterUseCase::new(repo.clone())
        .execute(register_input("a@b.com", "secret"))
        .await
        .unwrap();

    let err = LoginUseCase::new(repo, test_config())
        .execute(login_input("a@b.com", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn test_default_ttl_is_one_hour() {
    let config = AuthConfig::new(b"s".to_vec());
    assert_eq!(config.token_ttl, Duration::from_secs(3600));
}
