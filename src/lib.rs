//! Inkwell - a small blog with posts and comments.
//!
//! The crate contains the REST backend (`web`, `blog`, `auth`, `db`) and a
//! client library (`client`) that drives the post list from a user's side.

pub mod auth;
pub mod blog;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    authenticate, hash_password, register, validate_password, verify_password, PasswordError,
    RegistrationRequest,
};
pub use blog::{BlogService, Comment, Post, PostWithComments};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{InkwellError, Result};
pub use web::WebServer;
