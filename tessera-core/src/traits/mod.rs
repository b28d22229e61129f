//! Hardware abstraction traits
//!
//! The interface between the tick logic and the physical panel lines.

pub mod lines;

pub use lines::{MatrixLines, PanelLines};
