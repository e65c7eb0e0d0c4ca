//! Showroom - furniture catalog API
//!
//! Relevance-ranked product search, autocomplete suggestions and an
//! in-memory TTL response cache, served over HTTP.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
