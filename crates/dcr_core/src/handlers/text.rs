use dcr_platform::constants::{HT_MENU, MENU_CLASS_ATOM};
use dcr_platform::{DcHandle, FrameRegion, Point, RedrawRequest, WindowHandle};

use crate::dispatcher::Redirector;
use crate::operation::Operation;
use crate::scan::ArgList;
use crate::substitute::FontScope;

/// Where formatted text aimed at a display context would end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDestination {
    /// A popup menu window; the menu repaints itself.
    Menu,
    /// The menu bar in the window frame, owned by the window manager.
    NonClient(FrameRegion),
    /// Ordinary drawing surface.
    Surface,
}

impl Redirector {
    /// Classifies the target of text drawn at logical point `origin` on display context `dc`.
    pub fn text_destination(&self, hwnd: WindowHandle, dc: DcHandle, origin: Point) -> TextDestination {
        if hwnd.is_null() {
            return TextDestination::Surface;
        }

        let native = &*self.env.native;
        if native.class_atom(hwnd) == MENU_CLASS_ATOM {
            return TextDestination::Menu;
        }

        // Hit-testing sends a message; only do it on the owning thread.
        if native.current_thread_id() == native.window_thread_id(hwnd) {
            let screen = native.logical_to_screen(hwnd, dc, origin);
            if native.hit_test(hwnd, screen) == HT_MENU {
                if let Some(rects) = native.window_rects(hwnd) {
                    return TextDestination::NonClient(FrameRegion::from_window_rects(rects));
                }
            }
        }

        TextDestination::Surface
    }

    /// `ExtTextOutA/W`.
    ///
    /// Text that would land in a menu or in the non-client menu bar is not drawn; the window is
    /// invalidated instead and the call reports success. Anything else goes through guarded
    /// substitution with position repair.
    pub fn ext_text_out<A, F>(
        &self,
        op: Operation,
        dc: DcHandle,
        origin: Point,
        args: A,
        original: F,
    ) -> i32
    where
        A: ArgList,
        F: FnOnce(DcHandle, A) -> i32,
    {
        let _font = FontScope::enter(&*self.env.fonts, dc);

        if !self.is_display(dc) {
            let result = original(dc, args);
            self.trace(op, false, &result);
            return result;
        }

        let native = &*self.env.native;
        let hwnd = native.window_from_dc(dc);
        let result = match self.text_destination(hwnd, dc, origin) {
            TextDestination::Menu => {
                native.redraw(hwnd, RedrawRequest::InvalidateErase);
                1
            }
            TextDestination::NonClient(region) => {
                native.redraw(hwnd, RedrawRequest::InvalidateFrame(region));
                1
            }
            TextDestination::Surface => {
                self.substituted(self.registry.describe(op), dc, args, original)
            }
        };
        self.trace(op, true, &result);
        result
    }
}
