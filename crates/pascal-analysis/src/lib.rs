//! Symbol indexing and text diagnostics over a parsed document.

pub mod builtins;
pub mod diagnostics;
mod index;
mod symbols;
pub mod words;

pub use index::{index, symbol_kind};
pub use symbols::{Symbol, SymbolKind, SymbolTable};
