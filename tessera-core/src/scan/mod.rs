//! Display multiplexing
//!
//! One column per tick, with the idle timer deciding whether the column is
//! lit at all.

pub mod idle;
pub mod scanner;

pub use idle::IdleTimer;
pub use scanner::ColumnScanner;
