use proto_outline_schema::{BlockKind, FieldOption};
use serde::Serialize;

/// What a single source line means, structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    MessageOpen {
        name: String,
    },
    EnumOpen {
        name: String,
    },
    FieldDecl {
        option:     FieldOption,
        field_type: String,
        name:       String,
    },
    BlockClose,
    Irrelevant,
}

/// A block on the nesting stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenBlock {
    pub kind: BlockKind,
    pub name: String,
    /// 1-based line of the open keyword.
    pub line: usize,
}
