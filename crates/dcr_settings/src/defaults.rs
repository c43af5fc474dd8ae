pub fn default_trace_calls() -> bool {
    false
}

pub fn default_redirect_bitmaps() -> bool {
    true
}

pub fn default_disabled_operations() -> Vec<String> {
    Vec::new()
}
