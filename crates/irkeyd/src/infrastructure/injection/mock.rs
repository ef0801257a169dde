//! Recording mock injector for tests.
//!
//! The real injector spawns a subprocess that synthesizes keyboard
//! input on the test machine, which tests must never do. The mock
//! records each injected shortcut into a `Mutex<Vec<String>>` so
//! assertions can inspect exactly what was dispatched and in what
//! order, and can be constructed failing to exercise the fail-fast
//! path.

use std::sync::Mutex;

use crate::application::dispatch::{InjectionError, ShortcutInjector};

/// Records every injected shortcut instead of spawning a subprocess.
#[derive(Default)]
pub struct MockInjector {
    /// Shortcuts passed to `inject`, in call order.
    pub injected: Mutex<Vec<String>>,
    /// When `true`, every call returns [`InjectionError::Failed`].
    pub should_fail: bool,
}

impl MockInjector {
    /// Creates a mock that accepts every injection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose every injection fails.
    pub fn failing() -> Self {
        Self {
            injected: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }
}

impl ShortcutInjector for MockInjector {
    fn inject(&self, shortcut: &str) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Failed {
                shortcut: shortcut.to_string(),
                status: "mock failure".to_string(),
            });
        }
        self.injected.lock().unwrap().push(shortcut.to_string());
        Ok(())
    }
}
