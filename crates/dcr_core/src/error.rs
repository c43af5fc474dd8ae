use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstallError {
    #[error("{module} does not export {operation}")]
    MissingExport {
        module: &'static str,
        operation: Operation,
    },
    #[error("no wrapper is bound to {0}")]
    NoWrapper(Operation),
    #[error("hooking {operation} failed: {reason}")]
    HookFailed { operation: Operation, reason: String },
    #[error("enabling hooks failed: {0}")]
    EnableFailed(String),
    #[error("the redirector is already installed")]
    AlreadyInstalled,
}
