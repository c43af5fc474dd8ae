use std::sync::Arc;

use dcr_platform::{
    DcHandle, DcProvider, DisplaySurfaces, FontSubstitution, NativeGdi, OffScreenBuffers,
    WindowClassApi,
};
use dcr_settings::RedirectSettings;

use crate::guard::{AccessIntent, AccessStats, SurfaceLock};
use crate::operation::Operation;
use crate::registry::{Descriptor, OperationRegistry};
use crate::scan::{ArgList, CallResult};
use crate::substitute::{FontScope, SubstitutionScope};

/// Everything the dispatcher delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub surfaces: Arc<dyn DisplaySurfaces>,
    pub substitutes: Arc<dyn DcProvider>,
    pub buffers: Arc<dyn OffScreenBuffers>,
    pub fonts: Arc<dyn FontSubstitution>,
    pub native: Arc<dyn NativeGdi>,
    pub classes: Arc<dyn WindowClassApi>,
}

/// The interception-and-substitution dispatcher.
///
/// One instance serves every installed wrapper. The generic entry points live here; the
/// specialized handlers are in [`crate::handlers`].
pub struct Redirector {
    pub(crate) registry: OperationRegistry,
    pub(crate) lock: SurfaceLock,
    pub(crate) env: Collaborators,
    pub(crate) settings: RedirectSettings,
}

impl Redirector {
    pub fn new(env: Collaborators, settings: RedirectSettings) -> Self {
        Self::with_registry(env, settings, OperationRegistry::with_builtin_markers())
    }

    pub fn with_registry(
        env: Collaborators,
        settings: RedirectSettings,
        registry: OperationRegistry,
    ) -> Self {
        Self {
            registry,
            lock: SurfaceLock::new(),
            env,
            settings,
        }
    }

    #[inline]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    #[inline]
    pub fn settings(&self) -> &RedirectSettings {
        &self.settings
    }

    #[inline]
    pub fn collaborators(&self) -> &Collaborators {
        &self.env
    }

    /// True while the calling thread holds this redirector's surface lock.
    pub fn holds_surface_lock(&self) -> bool {
        self.lock.is_held_by_current_thread()
    }

    pub fn access_stats(&self) -> AccessStats {
        self.lock.stats()
    }

    /// True if `dc` or any context-typed argument denotes the display.
    #[inline]
    pub fn references_display<A: ArgList>(&self, dc: DcHandle, args: &A) -> bool {
        let surfaces = &*self.env.surfaces;
        surfaces.is_display_dc(dc) || args.references_display(surfaces)
    }

    /// Generic wrapper body for an operation `original(dc, args...)`.
    ///
    /// Without a display reference the call is forwarded untouched. Otherwise it runs under the
    /// surface lock with every display context substituted, and the position is copied back to
    /// `dc` when the operation relocates it and succeeded.
    pub fn dispatch<A, R, F>(&self, op: Operation, dc: DcHandle, args: A, original: F) -> R
    where
        A: ArgList,
        R: CallResult,
        F: FnOnce(DcHandle, A) -> R,
    {
        if !self.references_display(dc, &args) {
            let result = original(dc, args);
            self.trace(op, false, &result);
            return result;
        }

        let result = self.substituted(self.registry.describe(op), dc, args, original);
        self.trace(op, true, &result);
        result
    }

    /// [`dispatch`](Self::dispatch) inside a font-substitution scope.
    pub fn dispatch_text<A, R, F>(&self, op: Operation, dc: DcHandle, args: A, original: F) -> R
    where
        A: ArgList,
        R: CallResult,
        F: FnOnce(DcHandle, A) -> R,
    {
        let _font = FontScope::enter(&*self.env.fonts, dc);
        self.dispatch(op, dc, args, original)
    }

    pub(crate) fn substituted<A, R, F>(
        &self,
        descriptor: Descriptor,
        dc: DcHandle,
        args: A,
        original: F,
    ) -> R
    where
        A: ArgList,
        R: CallResult,
        F: FnOnce(DcHandle, A) -> R,
    {
        // Drop order releases the substitutes before the lock.
        let _guard = self.lock.acquire(AccessIntent::for_descriptor(descriptor));
        let mut scope = SubstitutionScope::new(&*self.env.substitutes, &*self.env.surfaces);

        let target = scope.substitute(dc);
        let args = args.substitute(&mut scope);
        let result = original(target, args);

        if descriptor.relocates_position && result.succeeded() && target != dc {
            self.repair_position(dc, target);
        }
        result
    }

    /// Copies the current position of `substitute` onto `original`.
    pub(crate) fn repair_position(&self, original: DcHandle, substitute: DcHandle) {
        let native = &*self.env.native;
        match native.current_position(substitute) {
            Some(p) => {
                native.move_to(original, p);
            }
            None => log::debug!("no current position on {substitute:?}"),
        }
    }

    #[inline]
    pub(crate) fn is_display(&self, dc: DcHandle) -> bool {
        self.env.surfaces.is_display_dc(dc)
    }

    pub(crate) fn trace(&self, op: Operation, display: bool, result: &dyn std::fmt::Debug) {
        if self.settings.trace_calls {
            let target = if display { "display" } else { "pass-through" };
            log::trace!("{op} [{target}] -> {result:?}");
        }
    }
}
