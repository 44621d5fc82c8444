//! Windows hook installation and management.
//!
//! Wraps `SetWindowsHookExW` / `UnhookWindowsHookEx` in a [`HookSet`]
//! that owns the keyboard and mouse hook handles together, so the
//! refresh thread can tear them down and reassert them as a unit.

use windows::core::Result;
use windows::Win32::Foundation::HMODULE;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, HOOKPROC, WH_KEYBOARD_LL, WH_MOUSE_LL,
    WINDOWS_HOOK_ID,
};

/// The pair of system-wide input hooks, keyboard and mouse.
///
/// At most one live handle of each kind exists at any time; every
/// install path releases the previous handle first. Handles are stored
/// as raw `isize` values so the set can move into the refresh thread;
/// after installation the owning thread is the only writer.
///
/// Dropping a `HookSet` with live handles leaks them - callers go
/// through [`HookSet::uninstall_all`] on their shutdown path instead,
/// because unhooking must happen before the process environment the
/// hooks depend on is torn down.
#[derive(Debug)]
pub struct HookSet {
    keyboard: Option<isize>,
    mouse: Option<isize>,
    keyboard_proc: HOOKPROC,
    mouse_proc: HOOKPROC,
}

impl HookSet {
    /// Creates an empty set bound to the given callbacks.
    ///
    /// Nothing is installed until [`HookSet::install_all`] is called.
    pub fn new(keyboard_proc: HOOKPROC, mouse_proc: HOOKPROC) -> Self {
        Self {
            keyboard: None,
            mouse: None,
            keyboard_proc,
            mouse_proc,
        }
    }

    /// Installs both low-level hooks, scoped process-wide (thread id 0).
    ///
    /// Resolves the current module handle and installs the keyboard hook
    /// first, then the mouse hook. If either call fails the set is
    /// rolled back to empty and the OS error is returned, so a partially
    /// hooked state never escapes this function.
    pub fn install_all(&mut self) -> Result<()> {
        self.uninstall_all();

        let module = unsafe { GetModuleHandleW(None)? };

        self.keyboard = Some(Self::install(WH_KEYBOARD_LL, self.keyboard_proc, module)?);
        match Self::install(WH_MOUSE_LL, self.mouse_proc, module) {
            Ok(handle) => self.mouse = Some(handle),
            Err(e) => {
                self.uninstall_all();
                return Err(e);
            }
        }

        tracing::debug!("Keyboard and mouse hooks installed");
        Ok(())
    }

    /// Tears down and reinstalls both hooks.
    ///
    /// Each hook is reinstalled independently: a failed reinstall leaves
    /// that handle empty until the next refresh cycle retries it. There
    /// is no retry bookkeeping here; the refresh loop's cadence is the
    /// retry policy.
    pub fn refresh(&mut self) {
        self.uninstall_all();

        let module = match unsafe { GetModuleHandleW(None) } {
            Ok(m) => m,
            Err(e) => {
                tracing::trace!(error = ?e, "Module handle lookup failed, skipping reinstall");
                return;
            }
        };

        match Self::install(WH_KEYBOARD_LL, self.keyboard_proc, module) {
            Ok(handle) => self.keyboard = Some(handle),
            Err(e) => tracing::trace!(error = ?e, "Keyboard hook reinstall failed"),
        }
        match Self::install(WH_MOUSE_LL, self.mouse_proc, module) {
            Ok(handle) => self.mouse = Some(handle),
            Err(e) => tracing::trace!(error = ?e, "Mouse hook reinstall failed"),
        }
    }

    /// Uninstalls whichever hooks are currently installed.
    ///
    /// Idempotent: an empty slot is skipped, so calling this repeatedly
    /// or on a never-installed set is a no-op.
    pub fn uninstall_all(&mut self) {
        Self::uninstall(&mut self.keyboard, "keyboard_ll");
        Self::uninstall(&mut self.mouse, "mouse_ll");
    }

    /// Returns true when both hooks are installed.
    pub fn installed(&self) -> bool {
        self.keyboard.is_some() && self.mouse.is_some()
    }

    fn install(hook_id: WINDOWS_HOOK_ID, callback: HOOKPROC, module: HMODULE) -> Result<isize> {
        let handle = unsafe { SetWindowsHookExW(hook_id, callback, module, 0)? };
        Ok(handle.0 as isize)
    }

    fn uninstall(slot: &mut Option<isize>, hook_type: &'static str) {
        if let Some(raw) = slot.take() {
            let result = unsafe { UnhookWindowsHookEx(HHOOK(raw as *mut _)) };
            if let Err(e) = result {
                tracing::error!(hook_type, error = ?e, "Failed to unhook");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_has_no_handles() {
        let hooks = HookSet::new(None, None);
        assert!(!hooks.installed());
    }

    #[test]
    fn test_uninstall_all_on_empty_set_is_noop() {
        let mut hooks = HookSet::new(None, None);
        hooks.uninstall_all();
        hooks.uninstall_all();
        assert!(!hooks.installed());
    }

    // Actually installing hooks requires an interactive window station
    // and a message pump on the installing thread, so install/refresh
    // paths are exercised at integration level.
}
