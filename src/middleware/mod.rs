//! Request middleware
//!
//! The authorization gate every protected route passes through.

pub mod auth;

pub use auth::AuthenticatedUser;
