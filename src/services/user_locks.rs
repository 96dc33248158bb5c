// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Per-user mutexes for read-modify-write sequences on the store.

use dashmap::DashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Lazily created lock per username. Clones share the same map.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `username`.
    ///
    /// A poisoned lock is recovered; the guarded data is `()`.
    pub fn with_lock<T>(&self, username: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(username);
        let _guard: MutexGuard<'_, ()> = lock.lock().unwrap_or_else(|e| e.into_inner());
        f()
    }

    fn lock_for(&self, username: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(username.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_same_user_is_serialized() {
        let locks = UserLocks::new();
        let inside = AtomicUsize::new(0);
        let max_seen = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        locks.with_lock("siti", || {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            max_seen.fetch_max(now, Ordering::SeqCst);
                            inside.fetch_sub(1, Ordering::SeqCst);
                        });
                    }
                });
            }
        });

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_locks() {
        let locks = UserLocks::new();
        let clone = locks.clone();
        assert!(Arc::ptr_eq(&locks.lock_for("a"), &clone.lock_for("a")));
        assert!(!Arc::ptr_eq(&locks.lock_for("a"), &clone.lock_for("b")));
    }
}
