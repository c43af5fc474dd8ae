#![cfg(target_os = "windows")]

mod class_record;
mod hooks;
pub mod install;
mod originals;
mod specialized;
pub mod win_api;

pub use class_record::{NativeWindowClass, NativeWindowClassEx};
pub use install::{HookPrimitive, HostServices, install, installed_redirector};
pub use win_api::Win32Native;
