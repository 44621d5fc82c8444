//! Windows message loop utilities.
//!
//! Low-level hooks are only serviced while the installing thread pumps
//! messages, so the host runs this loop for the lifetime of the process
//! and posts `WM_QUIT` to end it.

use std::sync::atomic::{AtomicU32, Ordering};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, PostThreadMessageW, TranslateMessage, MSG, WM_QUIT,
};

/// Thread id of the pumping thread, for cross-thread quit signaling.
static PUMP_THREAD_ID: AtomicU32 = AtomicU32::new(0);

/// Runs the Windows message loop until `WM_QUIT` is received.
///
/// Blocks the calling thread. Call this on the thread that installed
/// the hooks; if the pump stalls, Windows silently times the hooks out,
/// which is exactly the tampering the refresh thread guards against.
pub fn run_message_loop() {
    // Record our thread id so other threads can post WM_QUIT to us
    let thread_id = unsafe { GetCurrentThreadId() };
    PUMP_THREAD_ID.store(thread_id, Ordering::SeqCst);

    tracing::debug!(thread_id, "Message loop starting");

    let mut msg = MSG::default();

    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    tracing::debug!("Message loop exited");
}

/// Posts `WM_QUIT` to the pump thread to terminate the message loop.
///
/// Safe to call from any thread, including signal handlers. Does
/// nothing (with a warning) if the loop was never started.
pub fn post_quit_message(exit_code: i32) {
    let pump_thread_id = PUMP_THREAD_ID.load(Ordering::SeqCst);

    if pump_thread_id == 0 {
        tracing::warn!("Pump thread id not set, cannot post quit message");
        return;
    }

    let result = unsafe {
        PostThreadMessageW(
            pump_thread_id,
            WM_QUIT,
            windows::Win32::Foundation::WPARAM(exit_code as usize),
            windows::Win32::Foundation::LPARAM(0),
        )
    };

    match result {
        Ok(_) => tracing::debug!(exit_code, thread_id = pump_thread_id, "Posted quit message"),
        Err(e) => tracing::error!(?e, "Failed to post quit message to pump thread"),
    }
}

#[cfg(test)]
mod tests {
    // Pumping messages requires an actual message queue on the test
    // thread; the loop is exercised by running the binary.
}
