#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicU16, AtomicU32, Ordering};

use dcr_core::{Collaborators, Redirector, redirect_enabled};
use dcr_platform::constants::MENU_CLASS_ATOM;
use dcr_platform::*;
use dcr_settings::RedirectSettings;
use parking_lot::Mutex;

pub const SCREEN: DcHandle = DcHandle::from_raw(0x1000);
pub const SCREEN_2: DcHandle = DcHandle::from_raw(0x1100);
pub const MEMORY: DcHandle = DcHandle::from_raw(0x2000);

pub const MAIN_WINDOW: WindowHandle = WindowHandle::from_raw(0x500);
pub const MENU_WINDOW: WindowHandle = WindowHandle::from_raw(0x600);
pub const MENU_DC: DcHandle = DcHandle::from_raw(0x1600);

pub const WINDOW_RECT: Rect = Rect::new(100, 50, 500, 450);
pub const CLIENT_RECT: Rect = Rect::new(108, 80, 492, 442);

pub const DEFAULT_PROC_ANSI: WndProcAddr = 0xA000;
pub const DEFAULT_PROC_WIDE: WndProcAddr = 0xB000;
pub const HIDDEN_WINDOW: WindowHandle = WindowHandle::from_raw(0x900);

const SUBSTITUTE_OFFSET: usize = 0x10_0000;

pub fn substitute_of(dc: DcHandle) -> DcHandle {
    DcHandle::from_raw(dc.raw() + SUBSTITUTE_OFFSET)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Acquire(DcHandle),
    Release(DcHandle),
    FontEnter(DcHandle),
    FontLeave(DcHandle),
    MoveTo(DcHandle, Point),
    Redraw(WindowHandle, RedrawRequest),
    OffScreen(i32, i32),
    Upload {
        dc: DcHandle,
        bitmap: BitmapHandle,
        lines: u32,
    },
    Original(&'static str, DcHandle),
    Register {
        wnd_proc: WndProcAddr,
        icon: IconHandle,
        small_icon: IconHandle,
    },
    Unregister(u16),
    CreateHiddenWindow(u16),
    DestroyWindow(WindowHandle),
    SetClassLong {
        index: i32,
        value: isize,
        redirect_enabled: bool,
    },
    SetWindowProc(WndProcAddr),
}

/// Instrumented stand-in for every collaborator.
pub struct FakePlatform {
    events: Mutex<Vec<Event>>,
    positions: Mutex<HashMap<DcHandle, Point>>,
    pub fail_acquire: AtomicBool,
    pub fail_off_screen: AtomicBool,
    pub fail_hidden_window: AtomicBool,
    pub fail_register_stripped: AtomicBool,
    pub hit_test_result: AtomicIsize,
    pub window_thread: AtomicU32,
    pub current_thread: AtomicU32,
    next_atom: AtomicU16,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            positions: Mutex::new(HashMap::new()),
            fail_acquire: AtomicBool::new(false),
            fail_off_screen: AtomicBool::new(false),
            fail_hidden_window: AtomicBool::new(false),
            fail_register_stripped: AtomicBool::new(false),
            hit_test_result: AtomicIsize::new(1),
            window_thread: AtomicU32::new(7),
            current_thread: AtomicU32::new(7),
            next_atom: AtomicU16::new(0xC001),
        }
    }
}

impl FakePlatform {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, event: Event) {
        self.events.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().clear();
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }

    pub fn position(&self, dc: DcHandle) -> Point {
        self.positions.lock().get(&dc).copied().unwrap_or_default()
    }

    pub fn set_position(&self, dc: DcHandle, p: Point) {
        self.positions.lock().insert(dc, p);
    }

    /// A `LineTo` that draws on whatever context it is given.
    pub fn line_to(&self, dc: DcHandle, x: i32, y: i32) -> i32 {
        self.record(Event::Original("LineTo", dc));
        self.set_position(dc, Point::new(x, y));
        1
    }
}

impl DisplaySurfaces for FakePlatform {
    fn is_display_dc(&self, dc: DcHandle) -> bool {
        dc == SCREEN || dc == SCREEN_2 || dc == MENU_DC
    }
}

impl DcProvider for FakePlatform {
    fn acquire(&self, dc: DcHandle) -> Option<DcHandle> {
        self.record(Event::Acquire(dc));
        if self.fail_acquire.load(Ordering::SeqCst) {
            None
        } else {
            Some(substitute_of(dc))
        }
    }

    fn release(&self, original: DcHandle) {
        self.record(Event::Release(original));
    }

    fn original_of(&self, dc: DcHandle) -> DcHandle {
        if dc.raw() >= SUBSTITUTE_OFFSET {
            DcHandle::from_raw(dc.raw() - SUBSTITUTE_OFFSET)
        } else {
            dc
        }
    }
}

impl OffScreenBuffers for FakePlatform {
    fn create_off_screen_dib(&self, width: i32, height: i32) -> Option<BitmapHandle> {
        self.record(Event::OffScreen(width, height));
        if self.fail_off_screen.load(Ordering::SeqCst) {
            None
        } else {
            Some(BitmapHandle::from_raw(0xD1B))
        }
    }
}

impl FontSubstitution for FakePlatform {
    fn enter(&self, dc: DcHandle) -> FontToken {
        self.record(Event::FontEnter(dc));
        FontToken(dc.raw())
    }

    fn leave(&self, dc: DcHandle, token: FontToken) {
        assert_eq!(token, FontToken(dc.raw()));
        self.record(Event::FontLeave(dc));
    }
}

impl NativeGdi for FakePlatform {
    fn current_position(&self, dc: DcHandle) -> Option<Point> {
        Some(self.position(dc))
    }

    fn move_to(&self, dc: DcHandle, p: Point) -> bool {
        self.record(Event::MoveTo(dc, p));
        self.set_position(dc, p);
        true
    }

    fn upload_pixels(&self, dc: DcHandle, bitmap: BitmapHandle, upload: &PixelUpload) -> i32 {
        self.record(Event::Upload {
            dc,
            bitmap,
            lines: upload.lines,
        });
        upload.lines as i32
    }

    fn window_from_dc(&self, dc: DcHandle) -> WindowHandle {
        match dc {
            SCREEN => MAIN_WINDOW,
            MENU_DC => MENU_WINDOW,
            _ => WindowHandle::NULL,
        }
    }

    fn class_atom(&self, hwnd: WindowHandle) -> u16 {
        if hwnd == MENU_WINDOW { MENU_CLASS_ATOM } else { 0xC100 }
    }

    fn window_thread_id(&self, _hwnd: WindowHandle) -> u32 {
        self.window_thread.load(Ordering::SeqCst)
    }

    fn current_thread_id(&self) -> u32 {
        self.current_thread.load(Ordering::SeqCst)
    }

    fn logical_to_screen(&self, _hwnd: WindowHandle, _dc: DcHandle, p: Point) -> Point {
        p.offset(WINDOW_RECT.left, WINDOW_RECT.top)
    }

    fn hit_test(&self, _hwnd: WindowHandle, _screen: Point) -> isize {
        self.hit_test_result.load(Ordering::SeqCst)
    }

    fn window_rects(&self, _hwnd: WindowHandle) -> Option<WindowRects> {
        Some(WindowRects {
            window: WINDOW_RECT,
            client: CLIENT_RECT,
        })
    }

    fn redraw(&self, hwnd: WindowHandle, request: RedrawRequest) -> bool {
        self.record(Event::Redraw(hwnd, request));
        true
    }
}

impl WindowClassApi for FakePlatform {
    fn register_class_ex(&self, _charset: Charset, class: &WindowClass) -> u16 {
        self.record(Event::Register {
            wnd_proc: class.wnd_proc,
            icon: class.icon,
            small_icon: class.small_icon,
        });
        if !class.has_icons() && self.fail_register_stripped.load(Ordering::SeqCst) {
            return 0;
        }
        self.next_atom.fetch_add(1, Ordering::SeqCst)
    }

    fn unregister_class(&self, _charset: Charset, atom: u16, _instance: InstanceHandle) -> bool {
        self.record(Event::Unregister(atom));
        true
    }

    fn create_hidden_window(
        &self,
        _charset: Charset,
        atom: u16,
        _instance: InstanceHandle,
    ) -> Option<WindowHandle> {
        self.record(Event::CreateHiddenWindow(atom));
        if self.fail_hidden_window.load(Ordering::SeqCst) {
            None
        } else {
            Some(HIDDEN_WINDOW)
        }
    }

    fn destroy_window(&self, hwnd: WindowHandle) -> bool {
        self.record(Event::DestroyWindow(hwnd));
        true
    }

    fn set_class_long(&self, _charset: Charset, _hwnd: WindowHandle, index: i32, value: isize) -> usize {
        self.record(Event::SetClassLong {
            index,
            value,
            redirect_enabled: redirect_enabled(),
        });
        0
    }

    fn set_window_proc(&self, _charset: Charset, _hwnd: WindowHandle, proc: WndProcAddr) -> WndProcAddr {
        self.record(Event::SetWindowProc(proc));
        0
    }

    fn default_window_proc(&self, charset: Charset) -> WndProcAddr {
        match charset {
            Charset::Ansi => DEFAULT_PROC_ANSI,
            Charset::Wide => DEFAULT_PROC_WIDE,
        }
    }
}

pub fn redirector_with(fake: &Arc<FakePlatform>, settings: RedirectSettings) -> Redirector {
    let env = Collaborators {
        surfaces: fake.clone(),
        substitutes: fake.clone(),
        buffers: fake.clone(),
        fonts: fake.clone(),
        native: fake.clone(),
        classes: fake.clone(),
    };
    Redirector::new(env, settings)
}

pub fn redirector(fake: &Arc<FakePlatform>) -> Redirector {
    redirector_with(fake, RedirectSettings::default())
}
