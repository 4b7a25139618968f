//! HTTP handlers for the fintrack API

pub mod auth;
pub mod transaction;
