//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no module-level singleton
//! - All list operations use JOINs - no N+1 queries
//! - Filters arrive as typed values and are always bound, never spliced
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
