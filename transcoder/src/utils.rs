use crate::types::OpenBlock;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Describe a list of open blocks, e.g. `message "Outer" (line 1), enum "E" (line 3)`.
pub fn describe_blocks(blocks: &[OpenBlock]) -> String {
    blocks
        .iter()
        .map(|b| format!("{} {} (line {})", b.kind, quote(&b.name), b.line))
        .collect::<Vec<_>>()
        .join(", ")
}
