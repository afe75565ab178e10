//! Redraw cadence.
//!
//! - `TickScheduler` decides whether the interactive tick runs and keeps at
//!   most one tick pending
//! - `TaskQueue` is a single-threaded delayed-task queue hosts can use to
//!   honour `schedule_delayed` / `cancel`

mod queue;
mod scheduler;

pub use queue::TaskQueue;
pub use scheduler::{TaskToken, TickScheduler};
