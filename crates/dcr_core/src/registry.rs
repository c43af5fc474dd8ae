use std::collections::HashMap;

use crate::operation::Operation;

/// Access semantics of one intercepted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Descriptor {
    /// The operation moves the current position of its context.
    pub relocates_position: bool,
    /// The operation only reads from its destination.
    pub read_only: bool,
}

/// Operations that move the current position of their context.
pub const POSITION_RELOCATING: &[Operation] = &[
    Operation::AngleArc,
    Operation::ArcTo,
    Operation::LineTo,
    Operation::PolyBezierTo,
    Operation::PolyDraw,
    Operation::PolylineTo,
    Operation::ExtTextOutA,
    Operation::ExtTextOutW,
    Operation::PolyTextOutA,
    Operation::PolyTextOutW,
    Operation::TabbedTextOutA,
    Operation::TabbedTextOutW,
    Operation::TextOutA,
    Operation::TextOutW,
];

/// Operations that only read from their destination.
pub const READ_ONLY: &[Operation] = &[Operation::GetDIBits, Operation::GetPixel];

/// Per-operation descriptors.
///
/// Filled once during installation. Unmarked operations describe as
/// `Descriptor::default()` (mutating, position unchanged).
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    descriptors: HashMap<Operation, Descriptor>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the markers for the built-in operation table.
    pub fn with_builtin_markers() -> Self {
        let mut registry = Self::new();
        for &op in POSITION_RELOCATING {
            registry.mark_position_relocating(op);
        }
        for &op in READ_ONLY {
            registry.mark_read_only(op);
        }
        registry
    }

    pub fn mark_position_relocating(&mut self, op: Operation) {
        self.descriptors.entry(op).or_default().relocates_position = true;
    }

    pub fn mark_read_only(&mut self, op: Operation) {
        self.descriptors.entry(op).or_default().read_only = true;
    }

    #[inline]
    pub fn describe(&self, op: Operation) -> Descriptor {
        self.descriptors.get(&op).copied().unwrap_or_default()
    }
}
