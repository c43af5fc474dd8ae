//! Wrappers for the operations with bespoke handling.

#![allow(non_snake_case)]

use std::ffi::c_void;

use dcr_core::{DiBitmapRequest, Operation, Redirector};
use dcr_platform::{
    BitmapHandle, Charset, ClassicWindowClass, DcHandle, PixelUpload, Point, Rect, WindowClass,
    WindowHandle,
};
use windows::Win32::Graphics::Gdi::BITMAPINFOHEADER;

use crate::class_record::{NativeWindowClass, NativeWindowClassEx};
use crate::install::installed_redirector;
use crate::originals;

/// Looks up the original of `$op`, or returns `R::default()` from the wrapper.
macro_rules! original_or_return {
    ($op:expr, $ty:ty) => {
        match unsafe { originals::entry::<$ty>($op) } {
            Some(original) => original,
            None => {
                log::error!("{} called without an original", $op);
                return Default::default();
            }
        }
    };
}

type ExtTextOutAFn =
    unsafe extern "system" fn(DcHandle, i32, i32, u32, *const Rect, *const u8, u32, *const i32) -> i32;
type ExtTextOutWFn =
    unsafe extern "system" fn(DcHandle, i32, i32, u32, *const Rect, *const u16, u32, *const i32) -> i32;
type DrawCaptionFn = unsafe extern "system" fn(WindowHandle, DcHandle, *const Rect, u32) -> i32;
type CreateBitmapFn = unsafe extern "system" fn(DcHandle, i32, i32) -> BitmapHandle;
type CreateDiBitmapFn = unsafe extern "system" fn(
    DcHandle,
    *const BITMAPINFOHEADER,
    u32,
    *const c_void,
    *const c_void,
    u32,
) -> BitmapHandle;
type WindowFromDcFn = unsafe extern "system" fn(DcHandle) -> WindowHandle;
type RegisterClassFn = unsafe extern "system" fn(*const NativeWindowClass) -> u16;
type RegisterClassExFn = unsafe extern "system" fn(*const NativeWindowClassEx) -> u16;
type SetClassLongFn = unsafe extern "system" fn(WindowHandle, i32, i32) -> u32;

macro_rules! ext_text_out {
    ($name:ident, $op:ident, $fn_ty:ty, $char:ty) => {
        unsafe extern "system" fn $name(
            dc: DcHandle,
            x: i32,
            y: i32,
            options: u32,
            rect: *const Rect,
            text: *const $char,
            count: u32,
            dx: *const i32,
        ) -> i32 {
            let original = original_or_return!(Operation::$op, $fn_ty);
            let args = (x, y, options, rect, text, count, dx);
            type Args = (i32, i32, u32, *const Rect, *const $char, u32, *const i32);
            let call = |dc: DcHandle, (x, y, options, rect, text, count, dx): Args| unsafe {
                original(dc, x, y, options, rect, text, count, dx)
            };
            match installed_redirector() {
                Some(r) => r.ext_text_out(Operation::$op, dc, Point::new(x, y), args, call),
                None => call(dc, args),
            }
        }
    };
}

ext_text_out!(ExtTextOutA, ExtTextOutA, ExtTextOutAFn, u8);
ext_text_out!(ExtTextOutW, ExtTextOutW, ExtTextOutWFn, u16);

unsafe extern "system" fn DrawCaption(window: WindowHandle, dc: DcHandle, rect: *const Rect, flags: u32) -> i32 {
    let original = original_or_return!(Operation::DrawCaption, DrawCaptionFn);
    let call = |dc: DcHandle| unsafe { original(window, dc, rect, flags) };
    match installed_redirector() {
        Some(r) => r.draw_caption(dc, call),
        None => call(dc),
    }
}

unsafe extern "system" fn CreateCompatibleBitmap(dc: DcHandle, width: i32, height: i32) -> BitmapHandle {
    let original = original_or_return!(Operation::CreateCompatibleBitmap, CreateBitmapFn);
    let call = || unsafe { original(dc, width, height) };
    match installed_redirector() {
        Some(r) => r.create_compatible_bitmap(dc, width, height, call),
        None => call(),
    }
}

unsafe extern "system" fn CreateDiscardableBitmap(dc: DcHandle, width: i32, height: i32) -> BitmapHandle {
    let original = original_or_return!(Operation::CreateDiscardableBitmap, CreateBitmapFn);
    let call = || unsafe { original(dc, width, height) };
    match installed_redirector() {
        Some(r) => r.create_discardable_bitmap(dc, width, height, call),
        None => call(),
    }
}

/// Reads the decision-relevant parts of a `CreateDIBitmap` call.
///
/// # Safety
/// `header` must be null or point at a valid `BITMAPINFOHEADER`.
unsafe fn di_bitmap_request(
    header: *const BITMAPINFOHEADER,
    init_flags: u32,
    bits: *const c_void,
    info: *const c_void,
    usage: u32,
) -> DiBitmapRequest {
    let Some(header) = (unsafe { header.as_ref() }) else {
        return DiBitmapRequest {
            has_header: false,
            width: 0,
            height: 0,
            init_flags,
            init: None,
        };
    };
    let init = (!bits.is_null() && !info.is_null()).then(|| PixelUpload {
        bits,
        info,
        usage,
        start_scan: 0,
        lines: header.biHeight.unsigned_abs(),
    });
    DiBitmapRequest {
        has_header: true,
        width: header.biWidth,
        height: header.biHeight,
        init_flags,
        init,
    }
}

unsafe extern "system" fn CreateDIBitmap(
    dc: DcHandle,
    header: *const BITMAPINFOHEADER,
    init_flags: u32,
    bits: *const c_void,
    info: *const c_void,
    usage: u32,
) -> BitmapHandle {
    let original = original_or_return!(Operation::CreateDIBitmap, CreateDiBitmapFn);
    let call = || unsafe { original(dc, header, init_flags, bits, info, usage) };
    match installed_redirector() {
        Some(r) => {
            let request = unsafe { di_bitmap_request(header, init_flags, bits, info, usage) };
            r.create_di_bitmap(dc, &request, call)
        }
        None => call(),
    }
}

unsafe extern "system" fn WindowFromDC(dc: DcHandle) -> WindowHandle {
    let original = original_or_return!(Operation::WindowFromDC, WindowFromDcFn);
    let call = |dc: DcHandle| unsafe { original(dc) };
    match installed_redirector() {
        Some(r) => r.window_from_dc(dc, call),
        None => call(dc),
    }
}

fn register_class(
    r: &Redirector,
    charset: Charset,
    class: *const NativeWindowClass,
    original: RegisterClassFn,
) -> u16 {
    let record = unsafe { class.as_ref() }.map(ClassicWindowClass::from);
    r.register_class(charset, record.as_ref(), || unsafe { original(class) })
}

fn register_class_ex(
    r: &Redirector,
    charset: Charset,
    class: *const NativeWindowClassEx,
    original: RegisterClassExFn,
) -> u16 {
    let record = unsafe { class.as_ref() }.map(WindowClass::from);
    r.register_class_ex(charset, record.as_ref(), || unsafe { original(class) })
}

macro_rules! class_wrapper {
    ($name:ident, $op:ident, $charset:ident, $record:ty, $fn_ty:ty, $handler:ident) => {
        unsafe extern "system" fn $name(class: *const $record) -> u16 {
            let original = original_or_return!(Operation::$op, $fn_ty);
            match installed_redirector() {
                Some(r) => $handler(r, Charset::$charset, class, original),
                None => unsafe { original(class) },
            }
        }
    };
}

class_wrapper!(RegisterClassA, RegisterClassA, Ansi, NativeWindowClass, RegisterClassFn, register_class);
class_wrapper!(RegisterClassW, RegisterClassW, Wide, NativeWindowClass, RegisterClassFn, register_class);
class_wrapper!(RegisterClassExA, RegisterClassExA, Ansi, NativeWindowClassEx, RegisterClassExFn, register_class_ex);
class_wrapper!(RegisterClassExW, RegisterClassExW, Wide, NativeWindowClassEx, RegisterClassExFn, register_class_ex);

macro_rules! set_class_long {
    ($name:ident, $op:ident) => {
        unsafe extern "system" fn $name(window: WindowHandle, index: i32, value: i32) -> u32 {
            let original = original_or_return!(Operation::$op, SetClassLongFn);
            let call = || unsafe { original(window, index, value) };
            match installed_redirector() {
                Some(r) => r.set_class_long(index, call),
                None => call(),
            }
        }
    };
}

set_class_long!(SetClassLongA, SetClassLongA);
set_class_long!(SetClassLongW, SetClassLongW);

/// Wrapper address for an operation with a specialized binding.
pub(crate) fn specialized_detour(op: Operation) -> Option<usize> {
    let detour = match op {
        Operation::ExtTextOutA => ExtTextOutA as usize,
        Operation::ExtTextOutW => ExtTextOutW as usize,
        Operation::DrawCaption => DrawCaption as usize,
        Operation::CreateCompatibleBitmap => CreateCompatibleBitmap as usize,
        Operation::CreateDIBitmap => CreateDIBitmap as usize,
        Operation::CreateDiscardableBitmap => CreateDiscardableBitmap as usize,
        Operation::WindowFromDC => WindowFromDC as usize,
        Operation::RegisterClassA => RegisterClassA as usize,
        Operation::RegisterClassW => RegisterClassW as usize,
        Operation::RegisterClassExA => RegisterClassExA as usize,
        Operation::RegisterClassExW => RegisterClassExW as usize,
        Operation::SetClassLongA => SetClassLongA as usize,
        Operation::SetClassLongW => SetClassLongW as usize,
        _ => return None,
    };
    Some(detour)
}
