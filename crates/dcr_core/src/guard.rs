//! The single mutual-exclusion domain shared by every display-targeting call.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};

use crate::registry::Descriptor;

/// Whether a call reads from or writes to the display surface.
///
/// Classification only: both intents take the same lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessIntent {
    Read,
    Write,
}

impl AccessIntent {
    #[inline]
    pub fn for_descriptor(descriptor: Descriptor) -> Self {
        if descriptor.read_only {
            AccessIntent::Read
        } else {
            AccessIntent::Write
        }
    }
}

/// Acquisition counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessStats {
    pub reads: u64,
    pub writes: u64,
    /// Acquisitions by a thread that already held the lock.
    pub nested: u64,
}

static NEXT_THREAD_TOKEN: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_TOKEN: u64 = NEXT_THREAD_TOKEN.fetch_add(1, Ordering::Relaxed);
}

/// Non-zero identifier of the calling thread, unique for the process lifetime.
fn thread_token() -> u64 {
    THREAD_TOKEN.with(|token| *token)
}

/// Serializes all display-surface operations across threads.
#[derive(Debug, Default)]
pub struct SurfaceLock {
    domain: Mutex<()>,
    /// Token of the thread holding `domain`, or 0.
    owner: AtomicU64,
    reads: AtomicU64,
    writes: AtomicU64,
    nested: AtomicU64,
}

/// Token for one guarded call. The lock is released when the token drops.
#[must_use = "the surface lock is released as soon as the guard is dropped"]
pub struct AccessGuard<'a> {
    lock: &'a SurfaceLock,
    held: Option<MutexGuard<'a, ()>>,
    intent: AccessIntent,
}

impl SurfaceLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the domain is free.
    ///
    /// The dispatcher never re-enters while holding the lock, but a native entry point may call
    /// back into an intercepted one on the same thread. Such a nested acquisition is already
    /// serialized by the outer holder, so it is counted and does not lock again.
    pub fn acquire(&self, intent: AccessIntent) -> AccessGuard<'_> {
        match intent {
            AccessIntent::Read => self.reads.fetch_add(1, Ordering::Relaxed),
            AccessIntent::Write => self.writes.fetch_add(1, Ordering::Relaxed),
        };

        // Only the owning thread can have stored its own token here.
        let me = thread_token();
        if self.owner.load(Ordering::Acquire) == me {
            self.nested.fetch_add(1, Ordering::Relaxed);
            log::warn!("surface lock re-entered with {intent:?} intent");
            return AccessGuard {
                lock: self,
                held: None,
                intent,
            };
        }

        let held = self.domain.lock();
        self.owner.store(me, Ordering::Release);
        AccessGuard {
            lock: self,
            held: Some(held),
            intent,
        }
    }

    /// Runs `body` with the lock held.
    pub fn with_guard<R>(&self, intent: AccessIntent, body: impl FnOnce() -> R) -> R {
        let _guard = self.acquire(intent);
        body()
    }

    pub fn stats(&self) -> AccessStats {
        AccessStats {
            reads: self.reads.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            nested: self.nested.load(Ordering::Relaxed),
        }
    }

    /// True while the calling thread holds the lock.
    pub fn is_held_by_current_thread(&self) -> bool {
        self.owner.load(Ordering::Acquire) == thread_token()
    }
}

impl AccessGuard<'_> {
    #[inline]
    pub fn intent(&self) -> AccessIntent {
        self.intent
    }
}

impl Drop for AccessGuard<'_> {
    fn drop(&mut self) {
        if let Some(held) = self.held.take() {
            self.lock.owner.store(0, Ordering::Release);
            drop(held);
        }
    }
}
