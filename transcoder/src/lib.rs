//! proto-outline-transcoder
//!
//! This crate implements:
//!  1) A line classifier for `message`/`enum`/field/close lines,
//!  2) A nesting tracker (`ParserState`) that indents tokens and closes blocks,
//!  3) `transcode` over a whole text,
//!  4) Options (`TranscodeOptions`, `ClosePolicy`) and the error type (`OutlineError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod options;
pub mod classifier;
pub mod tracker;
pub mod compiler;

pub use classifier::classify;
pub use compiler::{transcode, Outline};
pub use error::OutlineError;
pub use options::{ClosePolicy, TranscodeOptions};
pub use tracker::ParserState;
pub use types::{ClassifiedLine, OpenBlock};
