//! Client library for the Inkwell API.
//!
//! [`ApiClient`] speaks HTTP. [`HomePage`] and [`LoginForm`] hold the
//! screen logic and take the [`Session`] explicitly.

mod api;
mod error;
pub mod home;
mod login;
mod optimistic;
mod session;

pub use api::{ApiClient, AuthApi, PostApi};
pub use error::ClientError;
pub use home::{HomePage, HomeState, Prompt};
pub use login::{LoginError, LoginForm};
pub use optimistic::Tentative;
pub use session::Session;
