//! Transaction domain: per-user records, summaries, and dashboard
//! aggregation.

mod service;

pub use service::TransactionService;
