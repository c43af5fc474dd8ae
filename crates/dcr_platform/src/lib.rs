pub mod constants;
pub mod geometry;
pub mod handles;
pub mod traits;
pub mod window_class;

pub use geometry::{FrameRegion, Point, Rect, WindowRects};
pub use handles::*;
pub use traits::*;
pub use window_class::{Charset, ClassicWindowClass, WindowClass};
