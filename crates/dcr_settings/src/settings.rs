use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Redirection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectSettings {
    /// Trace every intercepted call (operation, display involvement, result).
    #[serde(default = "default_trace_calls")]
    pub trace_calls: bool,

    /// Process-wide switch for redirecting display-compatible bitmaps to off-screen buffers.
    /// Combined with the per-thread redirect flag.
    #[serde(default = "default_redirect_bitmaps")]
    pub redirect_bitmaps: bool,

    /// Operation names (e.g. `"GdiDrawStream"`) that are left uninstalled.
    #[serde(default = "default_disabled_operations")]
    pub disabled_operations: Vec<String>,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self {
            trace_calls: default_trace_calls(),
            redirect_bitmaps: default_redirect_bitmaps(),
            disabled_operations: default_disabled_operations(),
        }
    }
}

impl RedirectSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_disabled(&self, operation_name: &str) -> bool {
        self.disabled_operations
            .iter()
            .any(|name| name.eq_ignore_ascii_case(operation_name))
    }
}
