use std::fmt;
use std::hash::BuildHasherDefault;

use pascal_syntax::Range;
use rustc_hash::FxHasher;

type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Module,
    Procedure,
    Function,
    Variable,
    Type,
    Constant,
}

impl SymbolKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Procedure => "procedure",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Type => "type",
            Self::Constant => "constant",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named declaration. `range` is the range of the node it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self { name: name.into(), kind, range }
    }
}

/// Case-insensitive symbol index of one document.
///
/// Later symbols shadow earlier ones whose names differ only in case.
/// Shadowed symbols stay reachable through [`SymbolTable::find_exact`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    by_name: FxIndexMap<String, usize>,
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn add(&mut self, symbol: Symbol) {
        let index = self.symbols.len();
        self.by_name.insert(symbol.name.to_ascii_lowercase(), index);
        self.symbols.push(symbol);
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        let &index = self.by_name.get(&name.to_ascii_lowercase())?;
        Some(&self.symbols[index])
    }

    /// First inserted symbol spelled exactly `name`, shadowed or not.
    pub fn find_exact(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }

    /// Live symbols, ordered by the first insertion of each name.
    pub fn get_all(&self) -> impl ExactSizeIterator<Item = &Symbol> + '_ {
        self.by_name.values().map(|&index| &self.symbols[index])
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
