//! Sign-up, sign-in, and session restore
//!
//! Every operation takes the store explicitly and returns a [`Session`]
//! carrying the authenticated user; call sites pass the session (or ids from
//! it) onward instead of consulting a global. Signing in writes the
//! current-user pointer so [`current_session`] can restore the identity on
//! the next launch; signing out clears it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::{self, PasswordError};
use crate::keys;
use crate::models::user::User;
use crate::store::Store;

/// Error type for identity operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Another account already uses this email (case-insensitively)
    #[error("email already in use")]
    DuplicateEmail,

    /// The email address is not syntactically valid
    #[error("invalid email address")]
    InvalidEmail,

    /// No account matches this email/password pair
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Input for creating an account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUp {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Plaintext password; stored only as an Argon2id hash
    pub password: String,
}

/// The authenticated identity, passed explicitly to call sites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user
    pub user: User,
}

impl Session {
    /// Convenience accessor for the signed-in user's id
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

/// Creates an account and signs it in
///
/// The new user becomes the current user and a session is returned.
///
/// # Errors
///
/// - `AuthError::InvalidEmail` when the address fails format validation
/// - `AuthError::DuplicateEmail` when an account already uses the email,
///   compared case-insensitively
pub fn sign_up(store: &Store, input: SignUp) -> Result<Session, AuthError> {
    input.validate().map_err(|_| AuthError::InvalidEmail)?;

    let mut users = User::list(store);
    let taken = users
        .iter()
        .any(|u| u.email.to_lowercase() == input.email.to_lowercase());
    if taken {
        return Err(AuthError::DuplicateEmail);
    }

    let user = User {
        id: Uuid::new_v4(),
        email: input.email,
        password_hash: password::hash_password(&input.password)?,
    };
    users.push(user.clone());
    store.write_array(keys::USERS, &users);
    store.set_string(keys::CURRENT_USER, &user.id.to_string());

    tracing::info!(user_id = %user.id, "account created");
    Ok(Session { user })
}

/// Signs in with an email/password pair
///
/// The email lookup is case-insensitive; the password is verified against
/// the stored hash. On success the current-user pointer is set and a session
/// returned.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` when no user matches the email or
/// the password does not verify.
pub fn sign_in(store: &Store, email: &str, password_input: &str) -> Result<Session, AuthError> {
    let user = User::find_by_email(store, email).ok_or(AuthError::InvalidCredentials)?;

    if !password::verify_password(password_input, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    store.set_string(keys::CURRENT_USER, &user.id.to_string());
    Ok(Session { user })
}

/// Clears the current-user pointer; idempotent
pub fn sign_out(store: &Store) {
    store.remove(keys::CURRENT_USER);
}

/// Restores the session from the persisted current-user pointer
///
/// Returns `None` when the pointer is unset, unparseable, or dangling.
pub fn current_session(store: &Store) -> Option<Session> {
    let raw = store.get_string(keys::CURRENT_USER)?;
    let id = Uuid::parse_str(&raw).ok()?;
    let user = User::find_by_id(store, id)?;
    Some(Session { user })
}
