//! Binding every intercepted operation to its wrapper at process start.

use dcr_settings::RedirectSettings;

use crate::error::InstallError;
use crate::operation::Operation;

/// Binds one operation to its wrapper (generic or specialized, per [`Operation::binding`]).
pub trait HookBinder {
    fn bind(&mut self, op: Operation) -> Result<(), InstallError>;
}

/// Outcome of [`install_all`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<Operation>,
    /// Left alone because settings disabled them.
    pub skipped: Vec<Operation>,
    pub failed: Vec<(Operation, InstallError)>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Binds every operation in table order.
///
/// A failed binding is logged and recorded; the remaining operations are still installed.
pub fn install_all<B>(binder: &mut B, settings: &RedirectSettings) -> InstallReport
where
    B: HookBinder + ?Sized,
{
    let mut report = InstallReport::default();
    for &op in Operation::ALL {
        if settings.is_disabled(op.name()) {
            log::debug!("{op} disabled by settings");
            report.skipped.push(op);
            continue;
        }
        match binder.bind(op) {
            Ok(()) => report.installed.push(op),
            Err(e) => {
                log::warn!("{op} not installed: {e}");
                report.failed.push((op, e));
            }
        }
    }
    log::info!(
        "installed {} of {} operations ({} skipped, {} failed)",
        report.installed.len(),
        Operation::COUNT,
        report.skipped.len(),
        report.failed.len()
    );
    report
}
