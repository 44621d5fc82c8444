//! The hook refresh thread.
//!
//! External tooling can unhook or patch a low-level hook out from under
//! the process. The refresh thread guards against that by periodically
//! tearing down and reinstalling both hooks. Between a teardown and the
//! following reinstall there is a narrow window with no hook installed;
//! coverage is best-effort by design.

use crate::winapi_utils::HookSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Configuration for the refresh thread.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How often to reassert the hooks (default: 100ms).
    ///
    /// Shorter intervals shrink the window in which a removed hook
    /// stays removed, at the cost of more syscall churn. No backoff,
    /// no jitter.
    pub refresh_interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(100),
        }
    }
}

/// Spawns the hook refresh thread.
///
/// The thread takes ownership of the `HookSet` and from then on is the
/// only writer of the handles. Each iteration sleeps for the configured
/// interval, re-checks the run flag, and refreshes both hooks. When the
/// flag goes false the loop exits without reinstalling, performs one
/// final uninstall (a no-op for handles that are already gone), and the
/// thread ends.
///
/// # Arguments
/// * `run` - Atomic flag; the thread keeps cycling while it is true
/// * `hooks` - The installed hook pair to keep alive
/// * `config` - Refresh cadence
///
/// # Returns
/// A `JoinHandle` for the spawned thread. The shutdown path flips the
/// flag and joins; the join completes within one refresh interval plus
/// scheduling margin.
pub fn spawn_refresh_thread(
    run: Arc<AtomicBool>,
    mut hooks: HookSet,
    config: RefreshConfig,
) -> JoinHandle<()> {
    thread::spawn(move || {
        tracing::info!(
            interval_ms = config.refresh_interval.as_millis() as u64,
            "Hook refresh thread started"
        );

        loop {
            thread::sleep(config.refresh_interval);

            if !run.load(Ordering::SeqCst) {
                break;
            }

            hooks.refresh();
        }

        tracing::info!("Hook refresh thread shutting down");
        hooks.uninstall_all();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_config_default() {
        let config = RefreshConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_refresher_exits_when_flag_already_false() {
        // Flag is false before the first wake-up, so the loop must exit
        // on its first iteration without ever touching the hook APIs.
        let run = Arc::new(AtomicBool::new(false));
        let hooks = HookSet::new(None, None);
        let config = RefreshConfig {
            refresh_interval: Duration::from_millis(10),
        };

        let handle = spawn_refresh_thread(run, hooks, config);
        handle.join().expect("refresh thread panicked");
    }

    #[test]
    fn test_refresher_exits_when_flag_flips_mid_run() {
        let run = Arc::new(AtomicBool::new(true));
        let hooks = HookSet::new(None, None);
        let config = RefreshConfig {
            refresh_interval: Duration::from_millis(5),
        };

        let handle = spawn_refresh_thread(Arc::clone(&run), hooks, config);
        thread::sleep(Duration::from_millis(20));
        run.store(false, Ordering::SeqCst);
        handle.join().expect("refresh thread panicked");
    }
}
