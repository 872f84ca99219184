use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

pub use line_index::LineIndex;
use line_index::{LineCol, WideEncoding, WideLineCol};
use pascal_analysis::SymbolTable;
pub use pascal_errors::Diagnostic;
use pascal_syntax::ast::Node;
use pascal_syntax::{Position, Range};
use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};

/// Everything known about one version of a document.
///
/// Built in one go by [`analyze`] and never mutated afterwards.
#[derive(Debug)]
pub struct DocumentInfo {
    text: String,
    line_index: LineIndex,
    ast: Option<Node>,
    symbols: SymbolTable,
    version: i32,
}

impl DocumentInfo {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// `None` when the text did not parse.
    pub fn ast(&self) -> Option<&Node> {
        self.ast.as_ref()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        pascal_analysis::diagnostics::check(&self.text, &self.symbols)
    }

    /// The identifier under (or just before) `position`.
    pub fn word_at(&self, position: Position) -> Option<(Range, &str)> {
        let offset = self.offset(position)?;
        let (range, word) = pascal_analysis::words::identifier_at(&self.text, offset)?;
        Some((self.range(range), word))
    }

    /// Byte offset of `position`. A `character` past the end of its line
    /// lands on the end of that line's content.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let line = self.line_index.line(position.line)?;
        let content = self.text[line].trim_end_matches(['\n', '\r']);

        let wide = WideLineCol { line: position.line, col: position.character };
        let line_col = self.line_index.to_utf8(WideEncoding::Utf16, wide)?;
        let col = TextSize::from(line_col.col).min(TextSize::of(content));

        Some(line.start() + col)
    }

    pub fn position(&self, offset: TextSize) -> Position {
        let line_col = self.line_index.line_col(offset);
        match self.line_index.to_wide(WideEncoding::Utf16, line_col) {
            Some(wide) => Position::new(wide.line, wide.col),
            None => Position::new(line_col.line, line_col.col),
        }
    }

    pub fn range(&self, range: TextRange) -> Range {
        Range::new(self.position(range.start()), self.position(range.end()))
    }

    /// Range from the start of the document to its end.
    pub fn full_range(&self) -> Range {
        self.range(TextRange::up_to(TextSize::of(&self.text)))
    }

    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_index.offset(LineCol { line, col: 0 })
    }
}

/// Tokenizes, parses and indexes `text` from scratch.
pub fn analyze(text: impl Into<String>, version: i32) -> DocumentInfo {
    let text = text.into();
    let ast = pascal_parse::parse(&text);
    let symbols = pascal_analysis::index(ast.as_ref());
    let line_index = LineIndex::new(&text);

    DocumentInfo { text, line_index, ast, symbols, version }
}

/// The open documents, keyed by identity.
///
/// Each entry is replaced wholesale on update, so a snapshot handed out by
/// [`DocumentStore::get`] stays internally consistent for as long as it is
/// held.
pub struct DocumentStore<K> {
    documents: FxHashMap<K, Arc<DocumentInfo>>,
}

impl<K> Default for DocumentStore<K> {
    fn default() -> Self {
        Self { documents: FxHashMap::default() }
    }
}

impl<K: Eq + Hash + fmt::Debug> DocumentStore<K> {
    pub fn update(&mut self, uri: K, text: impl Into<String>, version: i32) -> Arc<DocumentInfo> {
        let info = Arc::new(analyze(text, version));

        tracing::debug!(
            ?uri,
            version,
            parsed = info.ast.is_some(),
            symbols = info.symbols.len(),
            "document analyzed"
        );

        self.documents.insert(uri, Arc::clone(&info));
        info
    }

    pub fn get<Q>(&self, uri: &Q) -> Option<Arc<DocumentInfo>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.documents.get(uri).cloned()
    }

    /// Forgets a document. Returns whether it was open.
    pub fn evict<Q>(&mut self, uri: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        let removed = self.documents.remove(uri).is_some();
        tracing::debug!(?uri, removed, "document evicted");
        removed
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K> fmt::Debug for DocumentStore<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.documents.keys()).finish()
    }
}
