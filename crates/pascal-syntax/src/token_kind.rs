#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    String,
    Number,
    Operator,
    Punctuation,
    Comment,
    EndOfInput,
}

impl TokenKind {
    pub fn is_keyword(self, keyword: Keyword) -> bool {
        self == Self::Keyword(keyword)
    }
}

/// Reserved words. Matching is ASCII case-insensitive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Keyword {
    Program,
    Unit,
    Uses,
    Interface,
    Implementation,
    Begin,
    End,
    Var,
    Const,
    Type,
    Procedure,
    Function,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,
    Downto,
    Repeat,
    Until,
    Case,
    Of,
    Record,
    Class,
    Object,
    Initialization,
    Finalization,
    Constructor,
    Destructor,
}

impl Keyword {
    pub const ALL: [Self; 31] = [
        Self::Program,
        Self::Unit,
        Self::Uses,
        Self::Interface,
        Self::Implementation,
        Self::Begin,
        Self::End,
        Self::Var,
        Self::Const,
        Self::Type,
        Self::Procedure,
        Self::Function,
        Self::If,
        Self::Then,
        Self::Else,
        Self::While,
        Self::Do,
        Self::For,
        Self::To,
        Self::Downto,
        Self::Repeat,
        Self::Until,
        Self::Case,
        Self::Of,
        Self::Record,
        Self::Class,
        Self::Object,
        Self::Initialization,
        Self::Finalization,
        Self::Constructor,
        Self::Destructor,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Unit => "unit",
            Self::Uses => "uses",
            Self::Interface => "interface",
            Self::Implementation => "implementation",
            Self::Begin => "begin",
            Self::End => "end",
            Self::Var => "var",
            Self::Const => "const",
            Self::Type => "type",
            Self::Procedure => "procedure",
            Self::Function => "function",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::While => "while",
            Self::Do => "do",
            Self::For => "for",
            Self::To => "to",
            Self::Downto => "downto",
            Self::Repeat => "repeat",
            Self::Until => "until",
            Self::Case => "case",
            Self::Of => "of",
            Self::Record => "record",
            Self::Class => "class",
            Self::Object => "object",
            Self::Initialization => "initialization",
            Self::Finalization => "finalization",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
        }
    }

    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str().eq_ignore_ascii_case(ident))
    }
}
