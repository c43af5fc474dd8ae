use std::ffi::c_void;

use dcr_core::Operation;
use dcr_platform::{
    BitmapHandle, Charset, DcHandle, FrameRegion, InstanceHandle, NativeGdi, PixelUpload, Point,
    Rect, RedrawRequest, WindowClass, WindowClassApi, WindowHandle, WindowRects, WndProcAddr,
};
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::{PCSTR, PCWSTR};

use crate::class_record::NativeWindowClassEx;
use crate::originals;

type SetDiBitsFn = unsafe extern "system" fn(
    DcHandle,
    BitmapHandle,
    u32,
    u32,
    *const c_void,
    *const c_void,
    u32,
) -> i32;
type WindowFromDcFn = unsafe extern "system" fn(DcHandle) -> WindowHandle;
type RegisterClassExFn = unsafe extern "system" fn(*const NativeWindowClassEx) -> u16;

#[inline]
fn hdc(dc: DcHandle) -> HDC {
    HDC(dc.as_ptr())
}

#[inline]
fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.as_ptr())
}

#[inline]
fn hinstance(instance: InstanceHandle) -> HINSTANCE {
    HINSTANCE(instance.as_ptr())
}

#[inline]
fn to_rect(r: RECT) -> Rect {
    Rect::new(r.left, r.top, r.right, r.bottom)
}

#[inline]
fn to_win_rect(r: Rect) -> RECT {
    RECT {
        left: r.left,
        top: r.top,
        right: r.right,
        bottom: r.bottom,
    }
}

/// Integer-atom class name (`MAKEINTATOM`).
#[inline]
fn atom_name(atom: u16) -> usize {
    atom as usize
}

/// Native services backed by GDI/USER.
///
/// Intercepted entry points (`SetDIBits`, `WindowFromDC`, `RegisterClassExA/W`) are called
/// through their originals.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Native;

impl NativeGdi for Win32Native {
    fn current_position(&self, dc: DcHandle) -> Option<Point> {
        let mut p = POINT::default();
        unsafe { GetCurrentPositionEx(hdc(dc), &mut p) }
            .as_bool()
            .then(|| Point::new(p.x, p.y))
    }

    fn move_to(&self, dc: DcHandle, p: Point) -> bool {
        unsafe { MoveToEx(hdc(dc), p.x, p.y, None) }.as_bool()
    }

    fn upload_pixels(&self, dc: DcHandle, bitmap: BitmapHandle, upload: &PixelUpload) -> i32 {
        let Some(set_di_bits) = (unsafe { originals::resolve::<SetDiBitsFn>(Operation::SetDIBits) })
        else {
            log::warn!("SetDIBits unavailable, initial bits dropped");
            return 0;
        };
        unsafe {
            set_di_bits(
                dc,
                bitmap,
                upload.start_scan,
                upload.lines,
                upload.bits,
                upload.info,
                upload.usage,
            )
        }
    }

    fn window_from_dc(&self, dc: DcHandle) -> WindowHandle {
        match unsafe { originals::resolve::<WindowFromDcFn>(Operation::WindowFromDC) } {
            Some(window_from_dc) => unsafe { window_from_dc(dc) },
            None => WindowHandle::NULL,
        }
    }

    fn class_atom(&self, window: WindowHandle) -> u16 {
        unsafe { GetClassLongW(hwnd(window), GCW_ATOM) as u16 }
    }

    fn window_thread_id(&self, window: WindowHandle) -> u32 {
        unsafe { GetWindowThreadProcessId(hwnd(window), None) }
    }

    fn current_thread_id(&self) -> u32 {
        unsafe { GetCurrentThreadId() }
    }

    fn logical_to_screen(&self, window: WindowHandle, dc: DcHandle, p: Point) -> Point {
        let mut device = [POINT { x: p.x, y: p.y }];
        let mut window_rect = RECT::default();
        unsafe {
            let _ = LPtoDP(hdc(dc), &mut device);
            let _ = GetWindowRect(hwnd(window), &mut window_rect);
        }
        Point::new(device[0].x, device[0].y).offset(window_rect.left, window_rect.top)
    }

    fn hit_test(&self, window: WindowHandle, screen: Point) -> isize {
        unsafe {
            SendMessageW(
                hwnd(window),
                WM_NCHITTEST,
                Some(WPARAM(0)),
                Some(LPARAM(screen.to_lparam())),
            )
        }
        .0
    }

    fn window_rects(&self, window: WindowHandle) -> Option<WindowRects> {
        let mut info = WINDOWINFO {
            cbSize: size_of::<WINDOWINFO>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowInfo(hwnd(window), &mut info) }.ok()?;
        Some(WindowRects {
            window: to_rect(info.rcWindow),
            client: to_rect(info.rcClient),
        })
    }

    fn redraw(&self, window: WindowHandle, request: RedrawRequest) -> bool {
        match request {
            RedrawRequest::InvalidateErase => unsafe {
                RedrawWindow(Some(hwnd(window)), None, None, RDW_INVALIDATE | RDW_ERASE)
            }
            .as_bool(),
            RedrawRequest::InvalidateFrame(region) => redraw_frame(hwnd(window), region),
        }
    }
}

/// Invalidates the frame ring `region.outer - region.inner`.
fn redraw_frame(window: HWND, region: FrameRegion) -> bool {
    unsafe {
        let outer = CreateRectRgnIndirect(&to_win_rect(region.outer));
        let inner = CreateRectRgnIndirect(&to_win_rect(region.inner));
        let combined = CombineRgn(Some(outer), Some(outer), Some(inner), RGN_DIFF);
        let redrawn = combined != RGN_ERROR
            && RedrawWindow(Some(window), None, Some(outer), RDW_INVALIDATE | RDW_FRAME).as_bool();
        let _ = DeleteObject(inner.into());
        let _ = DeleteObject(outer.into());
        redrawn
    }
}

impl WindowClassApi for Win32Native {
    fn register_class_ex(&self, charset: Charset, class: &WindowClass) -> u16 {
        let op = match charset {
            Charset::Ansi => Operation::RegisterClassExA,
            Charset::Wide => Operation::RegisterClassExW,
        };
        let native = NativeWindowClassEx::from(class);
        match unsafe { originals::resolve::<RegisterClassExFn>(op) } {
            Some(register) => unsafe { register(&native) },
            None => 0,
        }
    }

    fn unregister_class(&self, charset: Charset, atom: u16, instance: InstanceHandle) -> bool {
        let name = atom_name(atom);
        let instance = Some(hinstance(instance));
        let result = unsafe {
            match charset {
                Charset::Ansi => UnregisterClassA(PCSTR(name as *const u8), instance),
                Charset::Wide => UnregisterClassW(PCWSTR(name as *const u16), instance),
            }
        };
        result.is_ok()
    }

    fn create_hidden_window(
        &self,
        charset: Charset,
        atom: u16,
        instance: InstanceHandle,
    ) -> Option<WindowHandle> {
        let name = atom_name(atom);
        let instance = Some(hinstance(instance));
        let window = unsafe {
            match charset {
                Charset::Ansi => CreateWindowExA(
                    WINDOW_EX_STYLE(0),
                    PCSTR(name as *const u8),
                    PCSTR::null(),
                    WINDOW_STYLE(0),
                    0,
                    0,
                    0,
                    0,
                    None,
                    None,
                    instance,
                    None,
                ),
                Charset::Wide => CreateWindowExW(
                    WINDOW_EX_STYLE(0),
                    PCWSTR(name as *const u16),
                    PCWSTR::null(),
                    WINDOW_STYLE(0),
                    0,
                    0,
                    0,
                    0,
                    None,
                    None,
                    instance,
                    None,
                ),
            }
        };
        window.ok().map(|w| WindowHandle::from_ptr(w.0))
    }

    fn destroy_window(&self, window: WindowHandle) -> bool {
        unsafe { DestroyWindow(hwnd(window)) }.is_ok()
    }

    fn set_class_long(&self, charset: Charset, window: WindowHandle, index: i32, value: isize) -> usize {
        let index = GET_CLASS_LONG_INDEX(index);
        unsafe {
            match charset {
                Charset::Ansi => SetClassLongPtrA(hwnd(window), index, value),
                Charset::Wide => SetClassLongPtrW(hwnd(window), index, value),
            }
        }
    }

    fn set_window_proc(&self, charset: Charset, window: WindowHandle, proc: WndProcAddr) -> WndProcAddr {
        let previous = unsafe {
            match charset {
                Charset::Ansi => SetWindowLongPtrA(hwnd(window), GWLP_WNDPROC, proc as isize),
                Charset::Wide => SetWindowLongPtrW(hwnd(window), GWLP_WNDPROC, proc as isize),
            }
        };
        previous as WndProcAddr
    }

    fn default_window_proc(&self, charset: Charset) -> WndProcAddr {
        let name = match charset {
            Charset::Ansi => "DefWindowProcA",
            Charset::Wide => "DefWindowProcW",
        };
        originals::plain_export("user32.dll", name).unwrap_or_else(|| {
            log::warn!("{name} not found");
            0
        })
    }
}
