use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ProcessError;

/// Deferred-interrupt flag shared with the SIGINT callback.
///
/// The callback itself only flips the flag; the shell loop polls it at
/// its safe points and performs the actual teardown there. Keeping the
/// store out of the callback means an interrupt can never land in the
/// middle of a mutation and observe a half-relinked chain.
#[derive(Clone, Debug, Default)]
pub struct InterruptFlag {
    fired: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the SIGINT callback. May only be called once per process.
    pub fn install(&self) -> Result<(), ProcessError> {
        let fired = self.fired.clone();
        ctrlc::set_handler(move || {
            fired.store(true, Ordering::SeqCst);
        })
        .map_err(|e| ProcessError::SignalError(e.to_string()))
    }

    /// Marks the flag as fired, as the signal callback would.
    pub fn raise(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }

    /// Consumes a pending interrupt, if any.
    pub fn take(&self) -> bool {
        self.fired.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_the_flag() {
        let flag = InterruptFlag::new();
        assert!(!flag.take());

        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = InterruptFlag::new();
        let alias = flag.clone();

        alias.raise();
        assert!(flag.take());
    }
}
