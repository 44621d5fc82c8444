//! Event filtering for intercepted input.
//!
//! This module contains the low-level hook callbacks that the OS invokes
//! for every keyboard and mouse event, plus the pure flag-scrubbing
//! helpers they are built on.

pub mod callbacks;
pub mod flags;

pub use callbacks::*;
pub use flags::*;
