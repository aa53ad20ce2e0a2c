use serde::Serialize;
use crate::block::{BlockKind, FieldOption};

/// The two indentation knobs of the output format.
///
/// `separator` sits between the words of a single token line, `nesting` is
/// repeated once per open block in front of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndentStyle {
    pub separator: char,
    pub nesting:   char,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle {
            separator: '-',
            nesting:   '\t',
        }
    }
}

/// One line of the normalized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "token", rename_all = "snake_case")]
pub enum OutputToken {
    MessageOpen {
        depth: usize,
        name:  String,
    },
    EnumOpen {
        depth: usize,
        name:  String,
    },
    Field {
        depth:      usize,
        option:     FieldOption,
        field_type: String,
        name:       String,
    },
    /// Closes a message. Enums have no close token.
    MessageEnd {
        depth: usize,
    },
}

impl OutputToken {
    /// Build the open token for a block of the given kind.
    pub fn open(kind: BlockKind, depth: usize, name: &str) -> OutputToken {
        match kind {
            BlockKind::Message => OutputToken::MessageOpen { depth, name: name.to_string() },
            BlockKind::Enum    => OutputToken::EnumOpen { depth, name: name.to_string() },
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            OutputToken::MessageOpen { depth, .. }
            | OutputToken::EnumOpen { depth, .. }
            | OutputToken::Field { depth, .. }
            | OutputToken::MessageEnd { depth } => *depth,
        }
    }

    /// Render the token as a single line, without the trailing newline.
    pub fn render(&self, style: &IndentStyle) -> String {
        let mut line: String = std::iter::repeat(style.nesting).take(self.depth()).collect();
        let sep = style.separator;

        match self {
            OutputToken::MessageOpen { name, .. } => {
                line.push_str(BlockKind::Message.keyword());
                line.push(sep);
                line.push_str(name);
            }
            OutputToken::EnumOpen { name, .. } => {
                line.push_str(BlockKind::Enum.keyword());
                line.push(sep);
                line.push_str(name);
            }
            OutputToken::Field { option, field_type, name, .. } => {
                line.push_str("field");
                line.push(sep);
                line.push_str(option.as_str());
                line.push(sep);
                line.push_str(field_type);
                line.push(sep);
                line.push_str(name);
            }
            OutputToken::MessageEnd { .. } => {
                line.push_str("msgend");
            }
        }

        line
    }
}
