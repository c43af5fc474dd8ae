//! Process-wide installation of every wrapper.

use std::sync::{Arc, OnceLock};

use dcr_core::{Collaborators, HookBinder, InstallError, InstallReport, Operation, Redirector, install_all};
use dcr_platform::{DcProvider, DisplaySurfaces, FontSubstitution, OffScreenBuffers};
use dcr_settings::RedirectSettings;

use crate::hooks::generic_detour;
use crate::originals;
use crate::specialized::specialized_detour;
use crate::win_api::Win32Native;

static REDIRECTOR: OnceLock<Redirector> = OnceLock::new();

/// The redirector the wrappers dispatch into, once [`install`] has run.
#[inline]
pub fn installed_redirector() -> Option<&'static Redirector> {
    REDIRECTOR.get()
}

/// Entry-point patching, supplied by the host.
pub trait HookPrimitive {
    /// Prepares a detour from `target` to `detour` without activating it.
    ///
    /// Returns the address that reaches the original behaviour of `target`.
    ///
    /// # Safety
    /// `target` and `detour` must be functions with identical signatures and calling convention.
    unsafe fn create_hook(&mut self, target: usize, detour: usize) -> Result<usize, String>;

    /// Activates every prepared detour.
    ///
    /// # Safety
    /// Every detour created so far must be ready to run.
    unsafe fn enable_all(&mut self) -> Result<(), String>;
}

/// Collaborators the surrounding compatibility layer provides.
#[derive(Clone)]
pub struct HostServices {
    pub surfaces: Arc<dyn DisplaySurfaces>,
    pub substitutes: Arc<dyn DcProvider>,
    pub buffers: Arc<dyn OffScreenBuffers>,
    pub fonts: Arc<dyn FontSubstitution>,
}

impl HostServices {
    fn into_collaborators(self) -> Collaborators {
        let native = Arc::new(Win32Native);
        Collaborators {
            surfaces: self.surfaces,
            substitutes: self.substitutes,
            buffers: self.buffers,
            fonts: self.fonts,
            native: native.clone(),
            classes: native,
        }
    }
}

fn detour_for(op: Operation) -> Option<usize> {
    if op.binding().is_generic() {
        generic_detour(op)
    } else {
        specialized_detour(op)
    }
}

struct DetourBinder<'a, P: ?Sized> {
    primitive: &'a mut P,
}

impl<P: HookPrimitive + ?Sized> HookBinder for DetourBinder<'_, P> {
    fn bind(&mut self, op: Operation) -> Result<(), InstallError> {
        let detour = detour_for(op).ok_or(InstallError::NoWrapper(op))?;
        let target = originals::export_address(op)?;
        let original = unsafe { self.primitive.create_hook(target, detour) }
            .map_err(|reason| InstallError::HookFailed { operation: op, reason })?;
        originals::store(op, original);
        Ok(())
    }
}

/// Installs the redirector and hooks every operation not disabled by `settings`.
///
/// Individual hook failures are reported, not fatal. Can only succeed once per process.
pub fn install<P>(primitive: &mut P, host: HostServices, settings: RedirectSettings) -> Result<InstallReport, InstallError>
where
    P: HookPrimitive + ?Sized,
{
    let redirector = Redirector::new(host.into_collaborators(), settings.clone());
    REDIRECTOR
        .set(redirector)
        .map_err(|_| InstallError::AlreadyInstalled)?;

    let mut binder = DetourBinder { primitive };
    let report = install_all(&mut binder, &settings);
    unsafe { binder.primitive.enable_all() }.map_err(InstallError::EnableFailed)?;
    Ok(report)
}
