//! Original entry points of the intercepted operations.
//!
//! The table is filled while hooks are created and before they are enabled, so a wrapper that
//! runs always finds its entry.

use std::ffi::CString;
use std::sync::atomic::{AtomicUsize, Ordering};

use dcr_core::{InstallError, Operation};
use windows::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress, LoadLibraryA};
use windows::core::PCSTR;

static ORIGINALS: [AtomicUsize; Operation::COUNT] = [const { AtomicUsize::new(0) }; Operation::COUNT];

pub(crate) fn store(op: Operation, address: usize) {
    ORIGINALS[op.index()].store(address, Ordering::Release);
}

#[inline]
pub(crate) fn load(op: Operation) -> Option<usize> {
    match ORIGINALS[op.index()].load(Ordering::Acquire) {
        0 => None,
        address => Some(address),
    }
}

/// Original of `op` as a typed function pointer.
///
/// # Safety
/// `F` must be the `extern "system"` signature of `op`.
#[inline]
pub(crate) unsafe fn entry<F: Copy>(op: Operation) -> Option<F> {
    debug_assert_eq!(size_of::<F>(), size_of::<usize>());
    load(op).map(|address| unsafe { std::mem::transmute_copy::<usize, F>(&address) })
}

/// Like [`entry`], but falls back to the export itself while `op` is not hooked.
///
/// # Safety
/// `F` must be the `extern "system"` signature of `op`.
pub(crate) unsafe fn resolve<F: Copy>(op: Operation) -> Option<F> {
    let address = load(op).or_else(|| export_address(op).ok())?;
    Some(unsafe { std::mem::transmute_copy::<usize, F>(&address) })
}

/// Address of the export named after `op`, loading its module if needed.
pub(crate) fn export_address(op: Operation) -> Result<usize, InstallError> {
    let missing = || InstallError::MissingExport {
        module: op.module().dll_name(),
        operation: op,
    };
    let module_name = CString::new(op.module().dll_name()).map_err(|_| missing())?;
    let proc_name = CString::new(op.name()).map_err(|_| missing())?;

    unsafe {
        let module_name = PCSTR(module_name.as_ptr().cast());
        let module = match GetModuleHandleA(module_name) {
            Ok(module) => module,
            Err(_) => LoadLibraryA(module_name).map_err(|_| missing())?,
        };
        GetProcAddress(module, PCSTR(proc_name.as_ptr().cast()))
            .map(|f| f as usize)
            .ok_or_else(missing)
    }
}

/// Address of an export that is never intercepted (`DefWindowProcA/W` and the like).
pub(crate) fn plain_export(module: &str, name: &str) -> Option<usize> {
    let module = CString::new(module).ok()?;
    let name = CString::new(name).ok()?;
    unsafe {
        let module = GetModuleHandleA(PCSTR(module.as_ptr().cast())).ok()?;
        GetProcAddress(module, PCSTR(name.as_ptr().cast())).map(|f| f as usize)
    }
}
