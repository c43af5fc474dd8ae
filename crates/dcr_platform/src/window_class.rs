use std::ffi::c_void;
use std::ptr;

use crate::handles::{BrushHandle, CursorHandle, IconHandle, InstanceHandle, WndProcAddr};

/// Character set of a USER entry point (`...A` vs `...W`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Ansi,
    Wide,
}

/// A classic (`WNDCLASS`) class description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicWindowClass {
    pub style: u32,
    pub wnd_proc: WndProcAddr,
    pub cls_extra: i32,
    pub wnd_extra: i32,
    pub instance: InstanceHandle,
    pub icon: IconHandle,
    pub cursor: CursorHandle,
    pub background: BrushHandle,
    pub menu_name: *const c_void,
    pub class_name: *const c_void,
}

/// A class description in the extended (`WNDCLASSEX`) shape.
///
/// Every registration is handled in this shape; classic records are converted on entry.
/// `menu_name` and `class_name` are passed through untouched (they may be integer atoms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowClass {
    pub style: u32,
    pub wnd_proc: WndProcAddr,
    pub cls_extra: i32,
    pub wnd_extra: i32,
    pub instance: InstanceHandle,
    pub icon: IconHandle,
    pub cursor: CursorHandle,
    pub background: BrushHandle,
    pub menu_name: *const c_void,
    pub class_name: *const c_void,
    pub small_icon: IconHandle,
}

impl Default for WindowClass {
    fn default() -> Self {
        Self {
            style: 0,
            wnd_proc: 0,
            cls_extra: 0,
            wnd_extra: 0,
            instance: InstanceHandle::NULL,
            icon: IconHandle::NULL,
            cursor: CursorHandle::NULL,
            background: BrushHandle::NULL,
            menu_name: ptr::null(),
            class_name: ptr::null(),
            small_icon: IconHandle::NULL,
        }
    }
}

impl WindowClass {
    #[inline]
    pub fn has_icons(&self) -> bool {
        !self.icon.is_null() || !self.small_icon.is_null()
    }

    /// Same class with both icons removed and `wnd_proc` replaced.
    pub fn without_icons(&self, wnd_proc: WndProcAddr) -> Self {
        Self {
            wnd_proc,
            icon: IconHandle::NULL,
            small_icon: IconHandle::NULL,
            ..*self
        }
    }
}

impl From<ClassicWindowClass> for WindowClass {
    fn from(c: ClassicWindowClass) -> Self {
        Self {
            style: c.style,
            wnd_proc: c.wnd_proc,
            cls_extra: c.cls_extra,
            wnd_extra: c.wnd_extra,
            instance: c.instance,
            icon: c.icon,
            cursor: c.cursor,
            background: c.background,
            menu_name: c.menu_name,
            class_name: c.class_name,
            small_icon: IconHandle::NULL,
        }
    }
}
