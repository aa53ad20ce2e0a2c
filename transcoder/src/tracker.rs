use proto_outline_schema::{BlockKind, OutputToken};
use tracing::{debug, warn};
use crate::{
    classifier::classify,
    error::OutlineError,
    options::{ClosePolicy, TranscodeOptions},
    types::{ClassifiedLine, OpenBlock},
    utils::describe_blocks,
};

/// Nesting state for one input file.
///
/// Feed lines in file order through [`ParserState::process_line`]; the
/// current depth is always the number of open blocks.
#[derive(Debug)]
pub struct ParserState {
    options: TranscodeOptions,
    stack:   Vec<OpenBlock>,
    line:    usize,
}

impl ParserState {
    pub fn new(options: TranscodeOptions) -> Self {
        ParserState {
            options,
            stack: Vec::new(),
            line:  0,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Blocks currently open, outermost first.
    pub fn open_blocks(&self) -> &[OpenBlock] {
        &self.stack
    }

    /// Number of lines processed so far.
    pub fn lines_processed(&self) -> usize {
        self.line
    }

    /// Classify `raw`, update the nesting stack and return the token the line
    /// produces, if any.
    pub fn process_line(&mut self, raw: &str) -> Result<Option<OutputToken>, OutlineError> {
        self.line += 1;

        match classify(raw) {
            ClassifiedLine::MessageOpen { name } => Ok(Some(self.open(BlockKind::Message, name))),
            ClassifiedLine::EnumOpen { name } => Ok(Some(self.open(BlockKind::Enum, name))),
            ClassifiedLine::FieldDecl { option, field_type, name } => {
                debug!(line = self.line, %option, %field_type, %name, "field found");
                Ok(Some(OutputToken::Field {
                    depth: self.depth(),
                    option,
                    field_type,
                    name,
                }))
            }
            ClassifiedLine::BlockClose => self.close(),
            ClassifiedLine::Irrelevant => Ok(None),
        }
    }

    /// Consume the state and report the blocks that were never closed.
    ///
    /// In strict mode any unclosed block is an error.
    pub fn finish(self) -> Result<Vec<OpenBlock>, OutlineError> {
        if !self.stack.is_empty() && self.options.strict {
            return Err(OutlineError::UnterminatedBlocks {
                blocks: describe_blocks(&self.stack),
            });
        }
        Ok(self.stack)
    }

    fn open(&mut self, kind: BlockKind, name: String) -> OutputToken {
        debug!(line = self.line, %kind, %name, depth = self.depth(), "block found");
        let token = OutputToken::open(kind, self.depth(), &name);
        self.stack.push(OpenBlock { kind, name, line: self.line });
        token
    }

    fn close(&mut self) -> Result<Option<OutputToken>, OutlineError> {
        let Some(block) = self.stack.pop() else {
            return match self.options.on_unbalanced_close {
                ClosePolicy::Fatal => Err(OutlineError::UnbalancedClose { line: self.line }),
                ClosePolicy::Ignore => {
                    warn!(line = self.line, "ignoring \"}}\" with no open block");
                    Ok(None)
                }
            };
        };

        debug!(line = self.line, kind = %block.kind, name = %block.name, "end found");
        match block.kind {
            BlockKind::Message => Ok(Some(OutputToken::MessageEnd { depth: self.depth() })),
            BlockKind::Enum => Ok(None),
        }
    }
}
