//! Display-context interception and substitution for GDI/USER drawing calls.

// Member crates
pub use dcr_core as dispatcher;
pub use dcr_platform as platform;
pub use dcr_settings as settings;

#[cfg(windows)]
pub use dcr_platform_windows as win32;

// Main types
pub use dcr_core::{
    Collaborators, InstallError, InstallReport, Operation, RedirectSuspension, Redirector,
    redirect_enabled,
};
pub use dcr_platform::{DcHandle, Point, Rect, WindowHandle};
pub use dcr_settings::RedirectSettings;
