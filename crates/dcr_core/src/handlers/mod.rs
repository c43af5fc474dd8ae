//! Operations the generic dispatch rule gets wrong.

mod bitmap;
mod caption;
mod text;
mod window;
mod window_class;

pub use bitmap::DiBitmapRequest;
pub use text::TextDestination;
