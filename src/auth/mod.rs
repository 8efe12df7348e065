//! Authentication module for Inkwell.
//!
//! This module provides password hashing, user registration and
//! credential checks.

mod password;
mod registration;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use registration::{authenticate, register, RegistrationRequest};
