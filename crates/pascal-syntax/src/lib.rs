//! Shared vocabulary of the Pascal front end.
//!
//! Positions, token kinds, keywords and the declaration-level syntax tree
//! produced by the parser and consumed by symbol indexing.

/// Declaration-level syntax tree.
pub mod ast;
mod keyword_set;
mod position;
mod token_kind;

/// Compact set for grouping `Keyword` values.
pub use keyword_set::KeywordSet;
/// Zero-based editor coordinates.
pub use position::{Position, Range};
/// Token classification.
pub use token_kind::{Keyword, TokenKind};
