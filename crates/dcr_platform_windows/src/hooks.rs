//! `extern "system"` wrappers for every operation bound to the generic dispatcher.
//!
//! Each wrapper has the exact native signature, with handles expressed as the pointer-sized
//! newtypes from `dcr_platform`. Struct arguments passed by value (`BLENDFUNCTION`) travel as
//! their 4-byte integer image.

#![allow(non_snake_case)]

use std::ffi::c_void;

use dcr_core::Operation;
use dcr_platform::{BitmapHandle, BrushHandle, DcHandle, IconHandle, Point, Rect, RegionHandle};

use crate::install::installed_redirector;
use crate::originals;

macro_rules! dc_wrappers {
    (@call generic, $r:expr, $op:expr, $dc:expr, $args:expr, $call:expr) => {
        $r.dispatch($op, $dc, $args, $call)
    };
    (@call text, $r:expr, $op:expr, $dc:expr, $args:expr, $call:expr) => {
        $r.dispatch_text($op, $dc, $args, $call)
    };
    ($($kind:ident $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        $(
            unsafe extern "system" fn $name(dc: DcHandle $(, $arg: $ty)*) -> $ret {
                type Native = unsafe extern "system" fn(DcHandle $(, $ty)*) -> $ret;
                let Some(original) = (unsafe { originals::entry::<Native>(Operation::$name) }) else {
                    log::error!("{} called without an original", Operation::$name);
                    return <$ret>::default();
                };
                let call = |dc: DcHandle, ($($arg,)*): ($($ty,)*)| unsafe { original(dc $(, $arg)*) };
                match installed_redirector() {
                    Some(r) => dc_wrappers!(@call $kind, r, Operation::$name, dc, ($($arg,)*), call),
                    None => call(dc, ($($arg,)*)),
                }
            }
        )*

        /// Wrapper address for an operation bound to the generic dispatcher.
        pub(crate) fn generic_detour(op: Operation) -> Option<usize> {
            match op {
                $(Operation::$name => Some($name as usize),)*
                _ => None,
            }
        }
    };
}

dc_wrappers! {
    // Bitmap functions
    generic AlphaBlend(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, ws: i32, hs: i32, blend: u32) -> i32;
    generic BitBlt(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, rop: u32) -> i32;
    generic ExtFloodFill(x: i32, y: i32, color: u32, fill_type: u32) -> i32;
    generic GdiAlphaBlend(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, ws: i32, hs: i32, blend: u32) -> i32;
    generic GdiGradientFill(vertices: *const c_void, vertex_count: u32, mesh: *const c_void, mesh_count: u32, mode: u32) -> i32;
    generic GdiTransparentBlt(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, ws: i32, hs: i32, transparent: u32) -> i32;
    generic GetDIBits(bitmap: BitmapHandle, start: u32, lines: u32, bits: *mut c_void, info: *mut c_void, usage: u32) -> i32;
    generic GetPixel(x: i32, y: i32) -> u32;
    generic GradientFill(vertices: *const c_void, vertex_count: u32, mesh: *const c_void, mesh_count: u32, mode: u32) -> i32;
    generic MaskBlt(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, mask: BitmapHandle, xm: i32, ym: i32, rop: u32) -> i32;
    generic PlgBlt(points: *const Point, src: DcHandle, xs: i32, ys: i32, w: i32, h: i32, mask: BitmapHandle, xm: i32, ym: i32) -> i32;
    generic SetDIBits(bitmap: BitmapHandle, start: u32, lines: u32, bits: *const c_void, info: *const c_void, usage: u32) -> i32;
    generic SetDIBitsToDevice(x: i32, y: i32, w: u32, h: u32, xs: i32, ys: i32, start: u32, lines: u32, bits: *const c_void, info: *const c_void, usage: u32) -> i32;
    generic SetPixel(x: i32, y: i32, color: u32) -> u32;
    generic SetPixelV(x: i32, y: i32, color: u32) -> i32;
    generic StretchBlt(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, ws: i32, hs: i32, rop: u32) -> i32;
    generic StretchDIBits(x: i32, y: i32, w: i32, h: i32, xs: i32, ys: i32, ws: i32, hs: i32, bits: *const c_void, info: *const c_void, usage: u32, rop: u32) -> i32;
    generic TransparentBlt(x: i32, y: i32, w: i32, h: i32, src: DcHandle, xs: i32, ys: i32, ws: i32, hs: i32, transparent: u32) -> i32;

    // Brush functions
    generic PatBlt(x: i32, y: i32, w: i32, h: i32, rop: u32) -> i32;

    // Device context functions
    generic DrawEscape(escape: i32, size: i32, input: *const u8) -> i32;

    // Filled shape functions
    generic Chord(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> i32;
    generic Ellipse(left: i32, top: i32, right: i32, bottom: i32) -> i32;
    generic FillRect(rect: *const Rect, brush: BrushHandle) -> i32;
    generic FrameRect(rect: *const Rect, brush: BrushHandle) -> i32;
    generic InvertRect(rect: *const Rect) -> i32;
    generic Pie(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> i32;
    generic Polygon(points: *const Point, count: i32) -> i32;
    generic PolyPolygon(points: *const Point, counts: *const i32, polygons: i32) -> i32;
    generic Rectangle(left: i32, top: i32, right: i32, bottom: i32) -> i32;
    generic RoundRect(left: i32, top: i32, right: i32, bottom: i32, w: i32, h: i32) -> i32;

    // Font and text functions
    text DrawTextA(text: *const u8, count: i32, rect: *mut Rect, format: u32) -> i32;
    text DrawTextW(text: *const u16, count: i32, rect: *mut Rect, format: u32) -> i32;
    text DrawTextExA(text: *mut u8, count: i32, rect: *mut Rect, format: u32, params: *mut c_void) -> i32;
    text DrawTextExW(text: *mut u16, count: i32, rect: *mut Rect, format: u32, params: *mut c_void) -> i32;
    text PolyTextOutA(texts: *const c_void, count: i32) -> i32;
    text PolyTextOutW(texts: *const c_void, count: i32) -> i32;
    text TabbedTextOutA(x: i32, y: i32, text: *const u8, count: i32, tab_count: i32, tabs: *const i32, tab_origin: i32) -> i32;
    text TabbedTextOutW(x: i32, y: i32, text: *const u16, count: i32, tab_count: i32, tabs: *const i32, tab_origin: i32) -> i32;
    text TextOutA(x: i32, y: i32, text: *const u8, count: i32) -> i32;
    text TextOutW(x: i32, y: i32, text: *const u16, count: i32) -> i32;

    // Icon functions
    generic DrawIcon(x: i32, y: i32, icon: IconHandle) -> i32;
    generic DrawIconEx(x: i32, y: i32, icon: IconHandle, w: i32, h: i32, step: u32, flicker_free: BrushHandle, flags: u32) -> i32;

    // Line and curve functions
    generic AngleArc(x: i32, y: i32, radius: u32, start: f32, sweep: f32) -> i32;
    generic Arc(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> i32;
    generic ArcTo(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> i32;
    generic LineTo(x: i32, y: i32) -> i32;
    generic PolyBezier(points: *const Point, count: u32) -> i32;
    generic PolyBezierTo(points: *const Point, count: u32) -> i32;
    generic PolyDraw(points: *const Point, types: *const u8, count: i32) -> i32;
    generic Polyline(points: *const Point, count: i32) -> i32;
    generic PolylineTo(points: *const Point, count: u32) -> i32;
    generic PolyPolyline(points: *const Point, counts: *const u32, polylines: u32) -> i32;

    // Painting and drawing functions
    generic DrawEdge(rect: *mut Rect, edge: u32, flags: u32) -> i32;
    generic DrawFocusRect(rect: *const Rect) -> i32;
    generic DrawFrameControl(rect: *mut Rect, kind: u32, state: u32) -> i32;
    text DrawStateA(brush: BrushHandle, callback: usize, ldata: isize, wdata: usize, x: i32, y: i32, w: i32, h: i32, flags: u32) -> i32;
    text DrawStateW(brush: BrushHandle, callback: usize, ldata: isize, wdata: usize, x: i32, y: i32, w: i32, h: i32, flags: u32) -> i32;
    text GrayStringA(brush: BrushHandle, output: usize, data: isize, count: i32, x: i32, y: i32, w: i32, h: i32) -> i32;
    text GrayStringW(brush: BrushHandle, output: usize, data: isize, count: i32, x: i32, y: i32, w: i32, h: i32) -> i32;
    generic PaintDesktop() -> i32;

    // Region functions
    generic FillRgn(region: RegionHandle, brush: BrushHandle) -> i32;
    generic FrameRgn(region: RegionHandle, brush: BrushHandle, w: i32, h: i32) -> i32;
    generic InvertRgn(region: RegionHandle) -> i32;
    generic PaintRgn(region: RegionHandle) -> i32;

    // Scroll bar functions
    generic ScrollDC(dx: i32, dy: i32, scroll: *const Rect, clip: *const Rect, update: RegionHandle, update_rect: *mut Rect) -> i32;

    // Undocumented functions
    generic GdiDrawStream(size: u32, stream: *const c_void) -> i32;
    generic PolyPatBlt(rop: u32, rects: *const c_void, count: u32, mode: u32) -> i32;
}
