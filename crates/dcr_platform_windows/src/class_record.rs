//! Native `WNDCLASS`/`WNDCLASSEX` layouts.
//!
//! The `A` and `W` records only differ in the type their string pointers point at, so one
//! layout serves both character sets.

use std::ffi::c_void;

use dcr_platform::{
    BrushHandle, ClassicWindowClass, CursorHandle, IconHandle, InstanceHandle, WindowClass,
    WndProcAddr,
};

/// `WNDCLASSA` / `WNDCLASSW`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeWindowClass {
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

/// `WNDCLASSEXA` / `WNDCLASSEXW`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeWindowClassEx {
    pub size: u32,
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

impl From<&NativeWindowClass> for ClassicWindowClass {
    fn from(c: &NativeWindowClass) -> Self {
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
        }
    }
}

impl From<&NativeWindowClassEx> for WindowClass {
    fn from(c: &NativeWindowClassEx) -> Self {
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
            small_icon: c.small_icon,
        }
    }
}

impl From<&WindowClass> for NativeWindowClassEx {
    fn from(c: &WindowClass) -> Self {
        Self {
            size: size_of::<NativeWindowClassEx>() as u32,
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
            small_icon: c.small_icon,
        }
    }
}
