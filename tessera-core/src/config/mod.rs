//! Panel configuration
//!
//! Geometry is fixed at compile time; timing and queue behaviour are
//! configurable and validated once at startup.

pub mod geometry;
pub mod timing;

pub use geometry::*;
pub use timing::*;
