use dcr_platform::DcHandle;

use crate::dispatcher::Redirector;
use crate::guard::AccessIntent;
use crate::operation::Operation;
use crate::substitute::SubstituteDc;

impl Redirector {
    /// `DrawCaption`. The window handle comes first in the native signature, so the generic
    /// rule does not apply; caption drawing never moves the current position.
    pub fn draw_caption<F>(&self, dc: DcHandle, original: F) -> i32
    where
        F: FnOnce(DcHandle) -> i32,
    {
        if !self.is_display(dc) {
            let result = original(dc);
            self.trace(Operation::DrawCaption, false, &result);
            return result;
        }

        let result = {
            let _guard = self.lock.acquire(AccessIntent::Write);
            let substitute = SubstituteDc::acquire(&*self.env.substitutes, dc);
            original(substitute.handle())
        };
        self.trace(Operation::DrawCaption, true, &result);
        result
    }
}
