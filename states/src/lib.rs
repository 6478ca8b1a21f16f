//! Task plumbing shared by the business and UI crates.
//!
//! The viewer issues exactly one request per mount. This crate keeps that request
//! cancellable and makes sure a result delivered after teardown (or from a stale
//! generation) never reaches the view model.

mod error;
mod slot;
mod task;

pub use error::Error;
pub use slot::{LatestOnlyUpdater, TaskSlot};
pub use task::{TaskHandle, TaskId, spawn_task};
