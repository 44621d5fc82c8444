//! Low-level hook callbacks.
//!
//! These are the two procedures registered with `SetWindowsHookExW`.
//! They execute synchronously inside the Windows input pipeline, so any
//! delay here causes system-wide input lag. The callbacks must:
//! - Use no locks and perform no allocation or I/O
//! - Mutate only the event record's flag word
//! - Always call `CallNextHookEx` and return its result unchanged
//!
//! Dropping an event or returning a custom value would break the hook
//! chain for every other consumer in the system.

use crate::filter::flags::{scrub_keyboard_flags, scrub_mouse_flags};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, HC_ACTION, KBDLLHOOKSTRUCT, MSLLHOOKSTRUCT,
};

/// Low-level keyboard hook callback.
///
/// Rewrites the `flags` field of the `KBDLLHOOKSTRUCT` behind `lparam`
/// so the injected-input markers are gone by the time the next hook in
/// the chain sees the event. The scrub is unconditional: no filtering by
/// virtual-key code, no inspection of any other field.
///
/// # Safety
/// Called by Windows with `lparam` pointing at a valid `KBDLLHOOKSTRUCT`
/// whenever `code` is `HC_ACTION`. The record is trusted as delivered;
/// no validation is performed.
pub unsafe extern "system" fn keyboard_hook_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if code == HC_ACTION as i32 {
        let record = &mut *(lparam.0 as *mut KBDLLHOOKSTRUCT);
        record.flags = scrub_keyboard_flags(record.flags);
    }

    // Forward with the original code/params; the return value is
    // whatever the rest of the chain produces.
    CallNextHookEx(None, code, wparam, lparam)
}

/// Low-level mouse hook callback.
///
/// Same contract as [`keyboard_hook_proc`], operating on the
/// `MSLLHOOKSTRUCT` flag word. Button and movement events are treated
/// identically.
///
/// # Safety
/// Called by Windows with `lparam` pointing at a valid `MSLLHOOKSTRUCT`
/// whenever `code` is `HC_ACTION`.
pub unsafe extern "system" fn mouse_hook_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if code == HC_ACTION as i32 {
        let record = &mut *(lparam.0 as *mut MSLLHOOKSTRUCT);
        record.flags = scrub_mouse_flags(record.flags);
    }

    CallNextHookEx(None, code, wparam, lparam)
}

#[cfg(test)]
mod tests {
    // The callbacks only add an HC_ACTION guard and a CallNextHookEx
    // forward around the flag scrub, which is covered in filter::flags.
    // Exercising the procedures themselves requires an installed hook
    // and a running message loop - integration territory.
}
