//! Scope-bound substitute contexts and font scopes.

use dcr_platform::{DcHandle, DcProvider, DisplaySurfaces, FontSubstitution, FontToken};

/// A substitute for one display context, released when dropped.
///
/// If the provider could not produce a substitute, [`handle`](Self::handle) is the original and
/// nothing is released.
pub struct SubstituteDc<'a> {
    provider: &'a dyn DcProvider,
    original: DcHandle,
    substitute: Option<DcHandle>,
}

impl<'a> SubstituteDc<'a> {
    pub fn acquire(provider: &'a dyn DcProvider, original: DcHandle) -> Self {
        let substitute = provider.acquire(original);
        if substitute.is_none() {
            log::debug!("no substitute for {original:?}, passing through");
        }
        Self {
            provider,
            original,
            substitute,
        }
    }

    /// Handle to pass to the original entry point.
    #[inline]
    pub fn handle(&self) -> DcHandle {
        self.substitute.unwrap_or(self.original)
    }

    #[inline]
    pub fn original(&self) -> DcHandle {
        self.original
    }

    #[inline]
    pub fn is_substituted(&self) -> bool {
        self.substitute.is_some()
    }
}

impl Drop for SubstituteDc<'_> {
    fn drop(&mut self) {
        if self.substitute.take().is_some() {
            self.provider.release(self.original);
        }
    }
}

/// All substitutes taken for the arguments of one call.
///
/// Each distinct display context is acquired once, however often it appears in the argument
/// list. Substitutes are released in reverse acquisition order when the scope drops.
pub struct SubstitutionScope<'a> {
    provider: &'a dyn DcProvider,
    surfaces: &'a dyn DisplaySurfaces,
    held: Vec<SubstituteDc<'a>>,
}

impl<'a> SubstitutionScope<'a> {
    pub fn new(provider: &'a dyn DcProvider, surfaces: &'a dyn DisplaySurfaces) -> Self {
        Self {
            provider,
            surfaces,
            held: Vec::new(),
        }
    }

    /// Substitute for `dc` if it denotes the display, `dc` itself otherwise.
    pub fn substitute(&mut self, dc: DcHandle) -> DcHandle {
        if let Some(held) = self.held.iter().find(|s| s.original() == dc) {
            return held.handle();
        }
        if !self.surfaces.is_display_dc(dc) {
            return dc;
        }
        let substitute = SubstituteDc::acquire(self.provider, dc);
        let handle = substitute.handle();
        self.held.push(substitute);
        handle
    }

    /// Number of distinct display contexts acquired so far.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl Drop for SubstitutionScope<'_> {
    fn drop(&mut self) {
        while let Some(substitute) = self.held.pop() {
            drop(substitute);
        }
    }
}

/// Font substitution active for the lifetime of the value.
pub struct FontScope<'a> {
    fonts: &'a dyn FontSubstitution,
    dc: DcHandle,
    token: FontToken,
}

impl<'a> FontScope<'a> {
    pub fn enter(fonts: &'a dyn FontSubstitution, dc: DcHandle) -> Self {
        let token = fonts.enter(dc);
        Self { fonts, dc, token }
    }
}

impl Drop for FontScope<'_> {
    fn drop(&mut self) {
        self.fonts.leave(self.dc, self.token);
    }
}
