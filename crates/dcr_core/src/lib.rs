//! Interception-and-substitution dispatcher.
//!
//! Intercepted GDI/USER entry points call into a [`Redirector`]. Calls that do not touch the
//! display are forwarded untouched; calls that do run under a single lock with the display
//! context swapped for a substitute, and have their position state repaired afterwards.

pub mod dispatcher;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod install;
pub mod operation;
pub mod redirect;
pub mod registry;
pub mod scan;
pub mod substitute;

pub use dispatcher::{Collaborators, Redirector};
pub use error::InstallError;
pub use guard::{AccessGuard, AccessIntent, AccessStats, SurfaceLock};
pub use handlers::{DiBitmapRequest, TextDestination};
pub use install::{HookBinder, InstallReport, install_all};
pub use operation::{Binding, Module, Operation};
pub use redirect::{RedirectSuspension, redirect_enabled};
pub use registry::{Descriptor, OperationRegistry};
pub use scan::{ArgList, CallResult, DcArg};
pub use substitute::{FontScope, SubstituteDc, SubstitutionScope};
