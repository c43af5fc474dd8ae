/// A point in logical or screen coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates by `(dx, dy)`, wrapping on overflow like the native coordinate math.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Pack into the `LPARAM` layout used by `WM_NCHITTEST` (low word x, high word y).
    #[inline]
    pub const fn to_lparam(self) -> isize {
        ((self.y << 16) | (self.x & 0xFFFF)) as isize
    }
}

/// A rectangle with the same layout as the Win32 `RECT`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.wrapping_add(dx),
            self.top.wrapping_add(dy),
            self.right.wrapping_add(dx),
            self.bottom.wrapping_add(dy),
        )
    }

    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// Window and client rectangles of one window, both in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRects {
    pub window: Rect,
    pub client: Rect,
}

/// A window's non-client area: `outer` minus `inner`.
///
/// Both rectangles are relative to the client origin, which is the coordinate space
/// `RedrawWindow` expects for its update region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    pub outer: Rect,
    pub inner: Rect,
}

impl FrameRegion {
    pub fn from_window_rects(rects: WindowRects) -> Self {
        let dx = rects.client.left.wrapping_neg();
        let dy = rects.client.top.wrapping_neg();
        Self {
            outer: rects.window.offset(dx, dy),
            inner: rects.client.offset(dx, dy),
        }
    }

    /// True if the point lies in the frame but not in the client area.
    pub fn contains(&self, p: Point) -> bool {
        self.outer.contains(p) && !self.inner.contains(p)
    }
}
