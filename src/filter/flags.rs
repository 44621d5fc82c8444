//! Injected-input flag scrubbing.
//!
//! Windows marks synthetically generated input (SendInput, injection from
//! a lower integrity level) with dedicated bits in the low-level hook
//! records. These helpers clear those bits so that downstream hook-chain
//! consumers observe the event as if it came from physical hardware.
//!
//! The helpers are pure functions over the flag words so the bit logic
//! can be tested without installing a hook.

use windows::Win32::UI::WindowsAndMessaging::{
    KBDLLHOOKSTRUCT_FLAGS, LLKHF_INJECTED, LLKHF_LOWER_IL_INJECTED, LLMHF_INJECTED,
    LLMHF_LOWER_IL_INJECTED,
};

/// Clears the injected-input markers from a `KBDLLHOOKSTRUCT` flag word.
///
/// Removes `LLKHF_INJECTED` and `LLKHF_LOWER_IL_INJECTED`; every other
/// bit (extended key, ALT state, transition state) passes through
/// untouched. Calling this on an already-clean word is a no-op.
#[inline]
pub fn scrub_keyboard_flags(flags: KBDLLHOOKSTRUCT_FLAGS) -> KBDLLHOOKSTRUCT_FLAGS {
    flags & !(LLKHF_INJECTED | LLKHF_LOWER_IL_INJECTED)
}

/// Clears the injected-input markers from a `MSLLHOOKSTRUCT` flag word.
///
/// Removes `LLMHF_INJECTED` and `LLMHF_LOWER_IL_INJECTED`, preserving all
/// other bits. Idempotent.
#[inline]
pub fn scrub_mouse_flags(flags: u32) -> u32 {
    flags & !(LLMHF_INJECTED | LLMHF_LOWER_IL_INJECTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{LLKHF_ALTDOWN, LLKHF_EXTENDED, LLKHF_UP};

    #[test]
    fn test_keyboard_injected_bits_cleared() {
        let flags = LLKHF_INJECTED | LLKHF_LOWER_IL_INJECTED | LLKHF_EXTENDED;
        assert_eq!(scrub_keyboard_flags(flags), LLKHF_EXTENDED);
    }

    #[test]
    fn test_keyboard_clean_flags_untouched() {
        let flags = LLKHF_ALTDOWN | LLKHF_UP;
        assert_eq!(scrub_keyboard_flags(flags), flags);
    }

    #[test]
    fn test_keyboard_scrub_idempotent() {
        let flags = LLKHF_INJECTED | LLKHF_UP;
        let once = scrub_keyboard_flags(flags);
        assert_eq!(scrub_keyboard_flags(once), once);
    }

    #[test]
    fn test_mouse_injected_bits_cleared() {
        // Unrelated high bit must survive the scrub
        let unrelated = 0x80u32;
        let flags = LLMHF_INJECTED | LLMHF_LOWER_IL_INJECTED | unrelated;
        assert_eq!(scrub_mouse_flags(flags), unrelated);
    }

    #[test]
    fn test_mouse_zero_flags_stay_zero() {
        assert_eq!(scrub_mouse_flags(0), 0);
    }
}
