//! Shared helpers for integration tests.

#![allow(dead_code)]

use locsize::SizeConfig;
use parking_lot::{Mutex, MutexGuard};

static GLOBAL: Mutex<()> = Mutex::new(());

/// Exclusive access to the process-wide configuration.
///
/// Tests run on parallel threads; holding the guard keeps them from seeing
/// each other's settings. The previous configuration is restored on drop.
pub struct GlobalConfigGuard {
    saved: SizeConfig,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for GlobalConfigGuard {
    fn drop(&mut self) {
        locsize::set_config(self.saved.clone());
    }
}

/// Lock the process-wide configuration and reset it to the defaults.
pub fn lock_global() -> GlobalConfigGuard {
    let lock = GLOBAL.lock();
    let saved = locsize::set_config(SizeConfig::default());
    GlobalConfigGuard { saved, _lock: lock }
}

/// Install a test-writer subscriber so `RUST_LOG=locsize=trace` shows events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
