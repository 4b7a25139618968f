//! Route definitions for the fintrack API

mod auth;
mod transaction;

pub use auth::auth_routes;
pub use transaction::transaction_routes;
