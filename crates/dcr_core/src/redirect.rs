//! Per-thread switch for redirecting display-compatible bitmaps to off-screen buffers.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static REDIRECT_TO_DIB: Cell<bool> = const { Cell::new(true) };
}

/// True unless a [`RedirectSuspension`] is alive on this thread.
#[inline]
pub fn redirect_enabled() -> bool {
    REDIRECT_TO_DIB.get()
}

/// Disables bitmap redirection on the current thread until dropped, then restores the previous
/// state. Suspensions nest.
#[must_use = "redirection is re-enabled as soon as the suspension is dropped"]
pub struct RedirectSuspension {
    previous: bool,
    // Restoring must happen on the thread that suspended.
    _not_send: PhantomData<*const ()>,
}

impl RedirectSuspension {
    pub fn begin() -> Self {
        Self {
            previous: REDIRECT_TO_DIB.replace(false),
            _not_send: PhantomData,
        }
    }
}

impl Drop for RedirectSuspension {
    fn drop(&mut self) {
        REDIRECT_TO_DIB.set(self.previous);
    }
}
