//! The fixed set of intercepted entry points.

/// DLL exporting an intercepted entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Gdi32,
    User32,
    Msimg32,
}

impl Module {
    pub const fn dll_name(self) -> &'static str {
        match self {
            Module::Gdi32 => "gdi32.dll",
            Module::User32 => "user32.dll",
            Module::Msimg32 => "msimg32.dll",
        }
    }
}

/// Which wrapper an operation is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Generic dispatcher for the operation's signature.
    Generic,
    /// Generic dispatcher inside a font-substitution scope.
    Text,
    ExtTextOut,
    DrawCaption,
    CompatibleBitmap,
    DiBitmap,
    DiscardableBitmap,
    WindowFromDc,
    RegisterClass,
    RegisterClassEx,
    SetClassLong,
}

impl Binding {
    #[inline]
    pub const fn is_generic(self) -> bool {
        matches!(self, Binding::Generic | Binding::Text)
    }
}

macro_rules! operations {
    ($($variant:ident => $module:ident, $binding:ident;)*) => {
        /// An intercepted entry point. The variant name is the exported symbol name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];
            pub const COUNT: usize = Self::ALL.len();

            /// Exported symbol name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => stringify!($variant),)*
                }
            }

            pub const fn module(self) -> Module {
                match self {
                    $(Operation::$variant => Module::$module,)*
                }
            }

            pub const fn binding(self) -> Binding {
                match self {
                    $(Operation::$variant => Binding::$binding,)*
                }
            }
        }
    };
}

operations! {
    // Bitmap functions
    AlphaBlend => Msimg32, Generic;
    BitBlt => Gdi32, Generic;
    CreateCompatibleBitmap => Gdi32, CompatibleBitmap;
    CreateDIBitmap => Gdi32, DiBitmap;
    CreateDiscardableBitmap => Gdi32, DiscardableBitmap;
    ExtFloodFill => Gdi32, Generic;
    GdiAlphaBlend => Gdi32, Generic;
    GdiGradientFill => Gdi32, Generic;
    GdiTransparentBlt => Gdi32, Generic;
    GetDIBits => Gdi32, Generic;
    GetPixel => Gdi32, Generic;
    GradientFill => Msimg32, Generic;
    MaskBlt => Gdi32, Generic;
    PlgBlt => Gdi32, Generic;
    SetDIBits => Gdi32, Generic;
    SetDIBitsToDevice => Gdi32, Generic;
    SetPixel => Gdi32, Generic;
    SetPixelV => Gdi32, Generic;
    StretchBlt => Gdi32, Generic;
    StretchDIBits => Gdi32, Generic;
    TransparentBlt => Msimg32, Generic;

    // Brush functions
    PatBlt => Gdi32, Generic;

    // Device context functions
    DrawEscape => Gdi32, Generic;
    WindowFromDC => User32, WindowFromDc;

    // Filled shape functions
    Chord => Gdi32, Generic;
    Ellipse => Gdi32, Generic;
    FillRect => User32, Generic;
    FrameRect => User32, Generic;
    InvertRect => User32, Generic;
    Pie => Gdi32, Generic;
    Polygon => Gdi32, Generic;
    PolyPolygon => Gdi32, Generic;
    Rectangle => Gdi32, Generic;
    RoundRect => Gdi32, Generic;

    // Font and text functions
    DrawTextA => User32, Text;
    DrawTextW => User32, Text;
    DrawTextExA => User32, Text;
    DrawTextExW => User32, Text;
    ExtTextOutA => Gdi32, ExtTextOut;
    ExtTextOutW => Gdi32, ExtTextOut;
    PolyTextOutA => Gdi32, Text;
    PolyTextOutW => Gdi32, Text;
    TabbedTextOutA => User32, Text;
    TabbedTextOutW => User32, Text;
    TextOutA => Gdi32, Text;
    TextOutW => Gdi32, Text;

    // Icon functions
    DrawIcon => User32, Generic;
    DrawIconEx => User32, Generic;

    // Line and curve functions
    AngleArc => Gdi32, Generic;
    Arc => Gdi32, Generic;
    ArcTo => Gdi32, Generic;
    LineTo => Gdi32, Generic;
    PolyBezier => Gdi32, Generic;
    PolyBezierTo => Gdi32, Generic;
    PolyDraw => Gdi32, Generic;
    Polyline => Gdi32, Generic;
    PolylineTo => Gdi32, Generic;
    PolyPolyline => Gdi32, Generic;

    // Painting and drawing functions
    DrawCaption => User32, DrawCaption;
    DrawEdge => User32, Generic;
    DrawFocusRect => User32, Generic;
    DrawFrameControl => User32, Generic;
    DrawStateA => User32, Text;
    DrawStateW => User32, Text;
    GrayStringA => User32, Text;
    GrayStringW => User32, Text;
    PaintDesktop => User32, Generic;

    // Region functions
    FillRgn => Gdi32, Generic;
    FrameRgn => Gdi32, Generic;
    InvertRgn => Gdi32, Generic;
    PaintRgn => Gdi32, Generic;

    // Scroll bar functions
    ScrollDC => User32, Generic;

    // Undocumented functions
    GdiDrawStream => Gdi32, Generic;
    PolyPatBlt => Gdi32, Generic;

    // Window class functions
    RegisterClassA => User32, RegisterClass;
    RegisterClassW => User32, RegisterClass;
    RegisterClassExA => User32, RegisterClassEx;
    RegisterClassExW => User32, RegisterClassEx;
    SetClassLongA => User32, SetClassLong;
    SetClassLongW => User32, SetClassLong;
}

impl Operation {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
