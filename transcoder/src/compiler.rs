use proto_outline_schema::{IndentStyle, OutputToken};
use serde::Serialize;
use crate::{
    error::OutlineError,
    options::TranscodeOptions,
    tracker::ParserState,
    types::OpenBlock,
};

/// The full result of transcoding one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub tokens:   Vec<OutputToken>,
    /// Blocks still open at end of input, outermost first.
    pub unclosed: Vec<OpenBlock>,
    /// Style the outline was transcoded with.
    #[serde(skip)]
    pub indent:   IndentStyle,
}

impl Outline {
    /// Render every token on its own `\n`-terminated line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.render(&self.indent));
            out.push('\n');
        }
        out
    }
}

/// Transcode a whole schema text into an `Outline`.
/// Returns `Err(OutlineError)` on an unbalanced close, or on unclosed blocks in strict mode.
pub fn transcode(text: &str, options: &TranscodeOptions) -> Result<Outline, OutlineError> {
    let mut state  = ParserState::new(*options);
    let mut tokens = Vec::new();

    for line in text.lines() {
        if let Some(token) = state.process_line(line)? {
            tokens.push(token);
        }
    }

    let unclosed = state.finish()?;
    Ok(Outline { tokens, unclosed, indent: options.indent })
}
