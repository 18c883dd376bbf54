//! Identity and sessions
//!
//! - `password`: Argon2id hashing and verification
//! - `identity`: sign-up/sign-in/sign-out and session restore
//!
//! The active identity is an explicit [`Session`] value handed to call
//! sites, not an ambient global. The store still persists a current-user
//! pointer, but only so a session can be restored on the next launch.

pub mod identity;
pub mod password;

pub use identity::{current_session, sign_in, sign_out, sign_up, AuthError, Session, SignUp};
pub use password::{hash_password, verify_password, PasswordError};
