// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod filter;
pub mod listing;
pub mod notify;
pub mod pipeline;
pub mod state;

// ---- Re-exports for stable public API ----
pub use crate::config::Config;
pub use crate::listing::{Announcement, ListingSource};
pub use crate::notify::Notifier;
pub use crate::pipeline::{run_once, RunSummary};
