//! Native constants the dispatcher needs to interpret arguments.

/// Class atom of the system menu window class (`#32768`).
pub const MENU_CLASS_ATOM: u16 = 0x8000;

/// `WM_NCHITTEST` result for the menu bar.
pub const HT_MENU: isize = 5;

/// `SetClassLong` index of the large class icon.
pub const GCL_HICON: i32 = -14;
/// `SetClassLong` index of the small class icon.
pub const GCL_HICONSM: i32 = -34;
/// `SetClassLong` index of the class window procedure.
pub const GCL_WNDPROC: i32 = -24;

/// `CreateDIBitmap` init flag: initialise the bitmap from the supplied bits.
pub const CBM_INIT: u32 = 0x04;
/// `CreateDIBitmap` init flag: create a DIB section instead of a device-dependent bitmap.
pub const CBM_CREATDIB: u32 = 0x02;

/// True for `SetClassLong` indices that assign a class icon.
#[inline]
pub const fn is_icon_index(index: i32) -> bool {
    index == GCL_HICON || index == GCL_HICONSM
}
