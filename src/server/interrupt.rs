//! Ctrl+C handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static PROCESS_FLAG: OnceLock<InterruptFlag> = OnceLock::new();

/// Shared flag raised when the user interrupts the process.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// A flag not connected to any signal handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide flag, installing the Ctrl+C handler on first use.
    ///
    /// If the handler cannot be installed the flag still works but is never
    /// raised by a signal.
    pub fn process() -> Self {
        PROCESS_FLAG
            .get_or_init(|| {
                let flag = InterruptFlag::new();
                let raised = flag.clone();
                if let Err(e) = ctrlc::set_handler(move || raised.raise()) {
                    tracing::warn!("Could not install Ctrl+C handler: {}", e);
                }
                flag
            })
            .clone()
    }

    /// Mark the process as interrupted.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt has been received.
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear the flag.
    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
