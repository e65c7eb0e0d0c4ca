//! Background Tasks Module
//!
//! Deferred and periodic work that keeps the response cache tidy.
//!
//! # Tasks
//! - Expiry: one-shot removal of a single entry once its TTL elapses
//! - Sweep: periodic removal of every stale entry

mod expiry;
mod sweep;

pub use expiry::schedule_expiry;
pub use sweep::spawn_sweep_task;
