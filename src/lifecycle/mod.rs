//! Hook lifecycle management.
//!
//! Owns installation, the background refresh loop that reasserts the
//! hooks against external removal, and final teardown on shutdown.

pub mod refresher;
pub mod service;

pub use refresher::*;
pub use service::*;
