//! InputScrub - input-event flag sanitizer.
//!
//! Installs system-wide low-level keyboard and mouse hooks that strip
//! the injected-input markers from every event, keeps the hooks alive
//! against external removal, and pumps messages until told to quit.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use inputscrub::lifecycle::{HookService, RefreshConfig};
use inputscrub::winapi_utils::{post_quit_message, run_message_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inputscrub=info")),
        )
        .init();

    // Install hooks and start the refresh thread before anything else;
    // a failed install degrades to a no-op service and we keep going.
    let service = HookService::start(RefreshConfig::default());
    if service.is_running() {
        tracing::info!("Input sanitization active");
    }

    // Ctrl+C ends the message loop; actual teardown happens after the
    // pump exits so hooks are gone before the process unwinds.
    ctrlc::set_handler(|| {
        tracing::info!("Shutdown signal received");
        post_quit_message(0);
    })?;

    // Low-level hooks are only serviced while this thread pumps messages.
    run_message_loop();

    service.stop();

    Ok(())
}
