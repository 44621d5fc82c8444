//! System-wide input-event interception and flag sanitization.
//!
//! This crate installs low-level keyboard and mouse hooks
//! (`WH_KEYBOARD_LL` / `WH_MOUSE_LL`), strips the "injected input" markers
//! from every intercepted event before forwarding it down the hook chain,
//! and periodically reinstalls both hooks so that external tooling cannot
//! silently remove them.
//!
//! The crate is organized into three layers:
//! - [`filter`] - the hook callbacks and the pure flag-scrubbing logic
//! - [`lifecycle`] - hook installation, the background refresh thread,
//!   and the start/stop service surface
//! - [`winapi_utils`] - safe wrappers around the WinAPI calls involved
//!   (hook management and the message pump)
//!
//! Low-level hooks require a message pump on the installing thread, so a
//! host embedding this crate must call
//! [`winapi_utils::run_message_loop`] after starting the service.

pub mod filter;
pub mod lifecycle;
pub mod winapi_utils;
