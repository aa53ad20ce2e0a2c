use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unbalanced \"}}\" at line {line}: no block is open")]
    UnbalancedClose {
        line: usize,
    },

    #[error("Unterminated blocks at end of input: {blocks}")]
    UnterminatedBlocks {
        blocks: String,
    },

    #[error("Invalid indent character {0}")]
    InvalidIndent(String),

    #[error("Invalid input path {0}")]
    InvalidPath(String),

    #[error("JSON error: {0}")]
    Json(String),
}
