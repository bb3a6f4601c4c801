use axum::extract::FromRef;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use super::{
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo_types::User,
};
use crate::{
    credits::repo as ledger,
    error::{AppError, AppResult},
    state::AppState,
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Shape checks done before anything touches the database.
pub(crate) fn validate_signup(email: &str, password: &str) -> AppResult<()> {
    if !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation("Password too short".into()));
    }
    Ok(())
}

/// Creates the user and opens their credit ledger in one transaction,
/// then issues a session token.
pub async fn register(state: &AppState, email: &str, password: &str) -> AppResult<(User, String)> {
    let email = normalize_email(email);
    validate_signup(&email, password)?;

    let hash = hash_password(password)?;

    let mut tx = state.db.begin().await?;
    let user = match User::create_tx(&mut tx, &email, &hash).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "email already registered");
            return Err(AppError::Conflict("Email already exists".into()));
        }
    };
    ledger::seed_tx(&mut tx, user.id, state.config.credits.starting_credits).await?;
    tx.commit().await?;

    let token = JwtKeys::from_ref(state).sign(user.id, &user.email)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((user, token))
}

/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn authenticate(state: &AppState, email: &str, password: &str) -> AppResult<(User, String)> {
    let email = normalize_email(email);

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(state).sign(user.id, &user.email)?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((user, token))
}
