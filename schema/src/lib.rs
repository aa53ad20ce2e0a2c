//! Shared types for the proto-outline transcoder.
//!
//! An outline is a flat list of [`OutputToken`]s. Each token knows its own
//! nesting depth and renders to exactly one line of text:
//!
//! ```
//! use proto_outline_schema::*;
//!
//! let token = OutputToken::Field {
//!     depth:      1,
//!     option:     FieldOption::Optional,
//!     field_type: "int32".to_owned(),
//!     name:       "bar".to_owned(),
//! };
//! assert_eq!(token.render(&IndentStyle::default()), "\tfield-optional-int32-bar");
//! ```

pub mod block;
pub mod token;

pub use block::*;
pub use token::*;
