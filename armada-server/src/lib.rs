//! armada-server: JSON API over the marine experiments database
//!
//! Exposes read access to research subjects and read/create/delete access
//! to experiments, with validation at the HTTP boundary and derived
//! percentage scoring computed at read time.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{run_server, ServerConfig};
