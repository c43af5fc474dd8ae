use std::ffi::c_void;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// Pointer-sized and `#[repr(transparent)]`, so it can stand in for the native handle in
        /// `extern "system"` signatures.
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            pub const NULL: $name = $name(0);

            #[inline]
            pub const fn from_raw(raw: usize) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> usize {
                self.0
            }

            #[inline]
            pub fn from_ptr(ptr: *mut c_void) -> Self {
                Self(ptr as usize)
            }

            #[inline]
            pub fn as_ptr(self) -> *mut c_void {
                self.0 as *mut c_void
            }

            #[inline]
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }
        }
    };
}

opaque_handle!(
    /// Drawing destination (`HDC`).
    DcHandle
);
opaque_handle!(
    /// Window (`HWND`).
    WindowHandle
);
opaque_handle!(
    /// Bitmap (`HBITMAP`).
    BitmapHandle
);
opaque_handle!(
    /// Icon (`HICON`).
    IconHandle
);
opaque_handle!(
    /// Region (`HRGN`).
    RegionHandle
);
opaque_handle!(
    /// Brush (`HBRUSH`).
    BrushHandle
);
opaque_handle!(
    /// Cursor (`HCURSOR`).
    CursorHandle
);
opaque_handle!(
    /// Module instance (`HINSTANCE`).
    InstanceHandle
);

/// Address of a window procedure.
///
/// Stored as an address instead of a typed function pointer: the dispatcher only moves it between
/// class records and never calls it.
pub type WndProcAddr = usize;
