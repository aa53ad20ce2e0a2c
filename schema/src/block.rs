use serde::Serialize;
use std::fmt;

/// The kind of structural block that is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Message,
    Enum,
}

impl BlockKind {
    /// The keyword that opens this kind of block, which is also the keyword
    /// used for its open token.
    pub fn keyword(&self) -> &'static str {
        match self {
            BlockKind::Message => "message",
            BlockKind::Enum    => "enum",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Field modifier. A field declared without one is `Optional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOption {
    Required,
    #[default]
    Optional,
    Repeated,
}

impl FieldOption {
    pub fn parse(text: &str) -> Option<FieldOption> {
        match text {
            "required" => Some(FieldOption::Required),
            "optional" => Some(FieldOption::Optional),
            "repeated" => Some(FieldOption::Repeated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldOption::Required => "required",
            FieldOption::Optional => "optional",
            FieldOption::Repeated => "repeated",
        }
    }
}

impl fmt::Display for FieldOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
