//! Start/stop surface for the sanitization service.
//!
//! The host calls [`HookService::start`] once during startup, before it
//! enters its message loop, and [`HookService::stop`] once the loop has
//! exited. Everything in between runs on the refresh thread.

use crate::filter::{keyboard_hook_proc, mouse_hook_proc};
use crate::lifecycle::refresher::{spawn_refresh_thread, RefreshConfig};
use crate::winapi_utils::HookSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Owns the run flag and the refresh thread for the installed hooks.
///
/// The run flag is the only cross-thread shared state: it starts true,
/// is flipped false exactly once by [`HookService::stop`], and is never
/// reset. The hook handles themselves live inside the refresh thread
/// after startup.
pub struct HookService {
    run: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl HookService {
    /// Installs the keyboard and mouse hooks and starts the refresh
    /// thread.
    ///
    /// Hook installation failure is terminal for the feature but not
    /// for the host: the error is logged, no thread is spawned, and the
    /// returned service is inert. Callers proceed with startup either
    /// way.
    pub fn start(config: RefreshConfig) -> Self {
        let mut hooks = HookSet::new(Some(keyboard_hook_proc), Some(mouse_hook_proc));

        if let Err(e) = hooks.install_all() {
            tracing::error!(error = ?e, "Failed to set up input hooks, sanitization disabled");
            return Self {
                run: Arc::new(AtomicBool::new(false)),
                worker: None,
            };
        }

        tracing::info!("Input hooks installed");

        let run = Arc::new(AtomicBool::new(true));
        let worker = spawn_refresh_thread(Arc::clone(&run), hooks, config);

        Self {
            run,
            worker: Some(worker),
        }
    }

    /// True while the refresh thread exists and has not been told to
    /// stop.
    pub fn is_running(&self) -> bool {
        self.worker.is_some() && self.run.load(Ordering::SeqCst)
    }

    /// Signals the refresh thread to stop and waits for it to finish
    /// its final hook teardown.
    ///
    /// Consumes the service; the flag flip happens exactly once. The
    /// join returns within one refresh interval plus scheduling margin,
    /// after which both hooks are guaranteed uninstalled.
    pub fn stop(mut self) {
        self.run.store(false, Ordering::SeqCst);

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Refresh thread panicked during shutdown");
            }
        }

        tracing::info!("Input hook service stopped");
    }
}

#[cfg(test)]
mod tests {
    // HookService::start installs real system-wide hooks, which needs
    // an interactive window station; the flag and thread lifecycle are
    // covered by the refresher tests, the rest by running the binary.
}
