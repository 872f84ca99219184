//! Names every Pascal program can use without declaring them.

use pascal_syntax::Keyword;

pub struct Routine {
    pub name: &'static str,
    /// Markdown documentation, where known.
    pub doc: Option<&'static str>,
}

const fn routine(name: &'static str, doc: Option<&'static str>) -> Routine {
    Routine { name, doc }
}

pub const ROUTINES: [Routine; 24] = [
    routine("WriteLn", Some("Writes values followed by a newline.")),
    routine("Write", Some("Writes values without a newline.")),
    routine("ReadLn", Some("Reads a line from standard input.")),
    routine("Read", Some("Reads values from standard input.")),
    routine("Length", Some("Returns length of string or array.")),
    routine("Copy", Some("Returns a substring.")),
    routine("Inc", Some("Increments a variable.")),
    routine("Dec", Some("Decrements a variable.")),
    routine("Ord", Some("Returns ordinal value of character.")),
    routine("Chr", Some("Returns character from ordinal value.")),
    routine("Pred", None),
    routine("Succ", None),
    routine("High", None),
    routine("Low", None),
    routine("SizeOf", None),
    routine("Assigned", None),
    routine("Str", None),
    routine("Val", None),
    routine("Concat", None),
    routine("Pos", None),
    routine("Delete", None),
    routine("Insert", None),
    routine("UpCase", None),
    routine("LowCase", None),
];

pub const TYPES: [&str; 19] = [
    "Integer", "String", "Boolean", "Char", "Real", "Byte", "Word", "LongInt", "Cardinal",
    "ShortInt", "SmallInt", "LongWord", "Int64", "Single", "Double", "Extended", "Pointer",
    "File", "Text",
];

/// Reserved words offered by completion.
pub const KEYWORDS: [&str; 38] = [
    "program",
    "unit",
    "uses",
    "interface",
    "implementation",
    "begin",
    "end",
    "var",
    "const",
    "type",
    "procedure",
    "function",
    "constructor",
    "destructor",
    "class",
    "record",
    "object",
    "property",
    "if",
    "then",
    "else",
    "case",
    "of",
    "for",
    "to",
    "downto",
    "while",
    "do",
    "repeat",
    "until",
    "try",
    "except",
    "finally",
    "with",
    "inherited",
    "override",
    "virtual",
    "abstract",
];

/// Words that are never user declarations but are not in [`KEYWORDS`]:
/// operators, literals, directives and implicit names.
const RESERVED: [&str; 27] = [
    "and", "or", "not", "xor", "div", "mod", "shl", "shr", "in", "is", "as", "nil", "true",
    "false", "array", "set", "packed", "out", "forward", "external", "overload", "result",
    "self", "exit", "break", "continue", "label",
];

pub fn routine_doc(name: &str) -> Option<(&'static str, &'static str)> {
    ROUTINES
        .iter()
        .find(|routine| routine.name.eq_ignore_ascii_case(name))
        .and_then(|routine| Some((routine.name, routine.doc?)))
}

/// Whether `word` is a built-in routine, type or reserved word, in any case.
pub fn is_builtin(word: &str) -> bool {
    let matches = |candidate: &&str| candidate.eq_ignore_ascii_case(word);

    Keyword::from_ident(word).is_some()
        || ROUTINES.iter().map(|routine| routine.name).any(|name| matches(&name))
        || TYPES.iter().any(matches)
        || KEYWORDS.iter().any(matches)
        || RESERVED.iter().any(matches)
}
