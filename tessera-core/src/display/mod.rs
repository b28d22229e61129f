//! Display state shared between the main loop and the scanner

pub mod store;

pub use store::BackingStore;
