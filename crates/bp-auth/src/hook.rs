//! Logout-at-shutdown guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Once-only guard around the shutdown logout.
///
/// `register` succeeds once per instance and `try_fire` succeeds at most once,
/// and only after registration. A disabled hook never registers.
#[derive(Debug)]
pub struct LogoutHook {
    enabled: bool,
    registered: AtomicBool,
    fired: AtomicBool,
}

impl LogoutHook {
    /// A guard that registers only when `enabled`.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            registered: AtomicBool::new(false),
            fired: AtomicBool::new(false),
        }
    }

    /// False when logout at shutdown is turned off.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true only on the first registration of an enabled hook.
    pub fn register(&self) -> bool {
        self.enabled && !self.registered.swap(true, Ordering::AcqRel)
    }

    /// True once a login has registered the hook.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// True once the shutdown logout has been claimed.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Claim the single firing. Returns false if unregistered or already fired.
    pub fn try_fire(&self) -> bool {
        self.is_registered() && !self.fired.swap(true, Ordering::AcqRel)
    }

    /// Registered but not yet fired.
    pub fn is_pending(&self) -> bool {
        self.is_registered() && !self.has_fired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once() {
        let hook = LogoutHook::new(true);
        assert!(hook.register());
        assert!(!hook.register());
        assert!(hook.is_registered());
    }

    #[test]
    fn test_fire_once() {
        let hook = LogoutHook::new(true);
        assert!(!hook.try_fire());

        hook.register();
        assert!(hook.is_pending());
        assert!(hook.try_fire());
        assert!(!hook.try_fire());
        assert!(hook.has_fired());
        assert!(!hook.is_pending());
    }

    #[test]
    fn test_disabled_hook_never_registers() {
        let hook = LogoutHook::new(false);
        assert!(!hook.register());
        assert!(!hook.try_fire());
        assert!(!hook.is_pending());
    }
}
