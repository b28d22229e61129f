//! Embassy tasks
//!
//! The tick task is the only task; it runs on the high-priority interrupt
//! executor while the main loop runs in thread mode.

mod tick;

pub use tick::tick_task;
