//! Contracts the dispatcher consumes.
//!
//! Everything here is implemented outside the dispatcher: by the compatibility layer that owns the
//! off-screen representation of the screen, or by the native GDI/USER backend.

use std::ffi::c_void;

use crate::geometry::{FrameRegion, Point, WindowRects};
use crate::handles::{BitmapHandle, DcHandle, InstanceHandle, WindowHandle, WndProcAddr};
use crate::window_class::{Charset, WindowClass};

/// Tracks which drawing contexts currently denote the physical display.
pub trait DisplaySurfaces: Send + Sync {
    /// Must be cheap and free of side effects: it runs on every intercepted call.
    fn is_display_dc(&self, dc: DcHandle) -> bool;
}

/// Hands out substitute drawing contexts for display contexts.
pub trait DcProvider: Send + Sync {
    /// Substitute for `dc`, or `None` when none could be produced (the call then proceeds on
    /// the original handle).
    fn acquire(&self, dc: DcHandle) -> Option<DcHandle>;

    /// Releases the substitute previously acquired for `original`.
    fn release(&self, original: DcHandle);

    /// Maps a substitute back to the context it stands in for. Non-substitutes map to themselves.
    fn original_of(&self, dc: DcHandle) -> DcHandle {
        dc
    }
}

/// Allocator for off-screen buffers that replace display-compatible bitmaps.
pub trait OffScreenBuffers: Send + Sync {
    fn create_off_screen_dib(&self, width: i32, height: i32) -> Option<BitmapHandle>;
}

/// Opaque state returned by [`FontSubstitution::enter`] and handed back on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontToken(pub usize);

/// Font substitution around text output.
pub trait FontSubstitution: Send + Sync {
    fn enter(&self, dc: DcHandle) -> FontToken;
    fn leave(&self, dc: DcHandle, token: FontToken);
}

/// Font substitution that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFontSubstitution;

impl FontSubstitution for NoFontSubstitution {
    fn enter(&self, _dc: DcHandle) -> FontToken {
        FontToken::default()
    }

    fn leave(&self, _dc: DcHandle, _token: FontToken) {}
}

/// Pixel data for the standard upload path (`SetDIBits`).
#[derive(Debug, Clone, Copy)]
pub struct PixelUpload {
    pub bits: *const c_void,
    /// Points at a `BITMAPINFO`.
    pub info: *const c_void,
    pub usage: u32,
    pub start_scan: u32,
    pub lines: u32,
}

/// Invalidation requested instead of drawing directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Invalidate and erase the whole window (`RDW_INVALIDATE | RDW_ERASE`).
    InvalidateErase,
    /// Invalidate only the frame, restricted to a region (`RDW_INVALIDATE | RDW_FRAME`).
    InvalidateFrame(FrameRegion),
}

/// Native GDI/USER services the dispatcher calls directly.
///
/// Implementations must reach the *original* entry points, never the intercepted ones.
pub trait NativeGdi: Send + Sync {
    fn current_position(&self, dc: DcHandle) -> Option<Point>;
    fn move_to(&self, dc: DcHandle, p: Point) -> bool;
    /// Returns the number of scan lines copied.
    fn upload_pixels(&self, dc: DcHandle, bitmap: BitmapHandle, upload: &PixelUpload) -> i32;

    fn window_from_dc(&self, dc: DcHandle) -> WindowHandle;
    fn class_atom(&self, hwnd: WindowHandle) -> u16;
    fn window_thread_id(&self, hwnd: WindowHandle) -> u32;
    fn current_thread_id(&self) -> u32;
    /// Converts a logical point on `dc` into screen coordinates relative to `hwnd`'s window rect.
    fn logical_to_screen(&self, hwnd: WindowHandle, dc: DcHandle, p: Point) -> Point;
    /// Result of `WM_NCHITTEST` for a screen point.
    fn hit_test(&self, hwnd: WindowHandle, screen: Point) -> isize;
    fn window_rects(&self, hwnd: WindowHandle) -> Option<WindowRects>;
    fn redraw(&self, hwnd: WindowHandle, request: RedrawRequest) -> bool;
}

/// Original window-class entry points.
pub trait WindowClassApi: Send + Sync {
    /// Returns the class atom, 0 on failure.
    fn register_class_ex(&self, charset: Charset, class: &WindowClass) -> u16;
    fn unregister_class(&self, charset: Charset, atom: u16, instance: InstanceHandle) -> bool;
    /// Creates an invisible, zero-sized window of class `atom`.
    fn create_hidden_window(
        &self,
        charset: Charset,
        atom: u16,
        instance: InstanceHandle,
    ) -> Option<WindowHandle>;
    fn destroy_window(&self, hwnd: WindowHandle) -> bool;
    /// Pointer-sized `SetClassLong`. Returns the previous value.
    fn set_class_long(&self, charset: Charset, hwnd: WindowHandle, index: i32, value: isize)
    -> usize;
    /// Replaces the instance window procedure. Returns the previous one.
    fn set_window_proc(&self, charset: Charset, hwnd: WindowHandle, proc: WndProcAddr)
    -> WndProcAddr;
    fn default_window_proc(&self, charset: Charset) -> WndProcAddr;
}
