use dcr_platform::{DcHandle, WindowHandle};

use crate::dispatcher::Redirector;
use crate::operation::Operation;

impl Redirector {
    /// `WindowFromDC`. Substitutes are not associated with any window, so they are mapped back
    /// to the context they stand in for first.
    pub fn window_from_dc<F>(&self, dc: DcHandle, original: F) -> WindowHandle
    where
        F: FnOnce(DcHandle) -> WindowHandle,
    {
        let result = original(self.env.substitutes.original_of(dc));
        self.trace(Operation::WindowFromDC, false, &result);
        result
    }
}
