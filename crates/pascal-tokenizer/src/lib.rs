mod cursor;

use cursor::Cursor;
pub use pascal_syntax::{Keyword, TokenKind};
use pascal_syntax::{Position, Range};
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text with its original casing; strings keep their quotes.
    pub text: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    /// 1-based column just past the last character.
    pub end_column: u32,
    pub text_range: TextRange,
}

impl Token {
    pub fn start_offset(&self) -> TextSize {
        self.text_range.start()
    }

    pub fn end_offset(&self) -> TextSize {
        self.text_range.end()
    }

    pub fn start(&self) -> Position {
        Position::from_one_based(self.line, self.column)
    }

    pub fn end(&self) -> Position {
        Position::from_one_based(self.line, self.end_column)
    }

    pub fn range(&self) -> Range {
        Range::new(self.start(), self.end())
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind.is_keyword(keyword)
    }

    pub fn is_punctuation(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == text
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Tokenizes the whole input. The last token is always `EndOfInput`.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).collect()
}

/// Streaming tokenizer. Yields exactly one `EndOfInput` token, then stops.
pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: Cursor::new(text), finished: false }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.trivia();

            let start = self.cursor.offset();
            let (line, column) = (self.cursor.line(), self.cursor.column());

            let kind = match self.cursor.peek() {
                _ if self.cursor.is_eof() => TokenKind::EndOfInput,
                'A'..='Z' | 'a'..='z' | '_' => self.word(),
                '0'..='9' => {
                    self.cursor.advance_while(|c| c.is_ascii_digit() || c == '.');
                    TokenKind::Number
                }
                '\'' | '"' => {
                    let text = self.string();
                    return self.token(TokenKind::String, text, start, line, column);
                }
                c if is_symbol(c) => self.symbol(),
                _ => {
                    self.cursor.advance();
                    continue;
                }
            };

            let text = self.text[TextRange::new(start, self.cursor.offset())].to_owned();
            return self.token(kind, text, start, line, column);
        }
    }

    fn token(
        &self,
        kind: TokenKind,
        text: String,
        start: TextSize,
        line: u32,
        column: u32,
    ) -> Token {
        Token {
            kind,
            text,
            line,
            column,
            end_column: self.cursor.column(),
            text_range: TextRange::new(start, self.cursor.offset()),
        }
    }

    fn trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                c if c.is_whitespace() => self.cursor.advance_while(char::is_whitespace),
                '/' if self.cursor.second() == '/' => self.cursor.advance_while(|c| c != '\n'),
                '{' => {
                    self.cursor.advance_while(|c| c != '}');
                    self.cursor.advance();
                }
                '(' if self.cursor.second() == '*' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    while !self.cursor.is_eof() {
                        if self.cursor.peek() == '*' && self.cursor.second() == ')' {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn word(&mut self) -> TokenKind {
        let start = self.cursor.offset();
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        match Keyword::from_ident(&self.text[TextRange::new(start, self.cursor.offset())]) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }

    /// Scans to the closing quote or the end of the line, whichever comes
    /// first, and re-wraps the body in the opening quote.
    fn string(&mut self) -> String {
        let quote = self.cursor.advance();
        let body_start = self.cursor.offset();
        self.cursor.advance_while(|c| c != quote && c != '\n' && c != '\r');
        let body = &self.text[TextRange::new(body_start, self.cursor.offset())];

        if self.cursor.peek() == quote {
            self.cursor.advance();
        }

        format!("{quote}{body}{quote}")
    }

    fn symbol(&mut self) -> TokenKind {
        let pair = [self.cursor.peek(), self.cursor.second()];

        if TWO_CHAR_OPERATORS.contains(&pair) {
            self.cursor.advance();
            self.cursor.advance();
            return TokenKind::Punctuation;
        }

        match self.cursor.advance() {
            '.' | ':' | ';' | ',' | '(' | ')' | '[' | ']' | '}' | '^' | '@' => {
                TokenKind::Punctuation
            }
            _ => TokenKind::Operator,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

const TWO_CHAR_OPERATORS: [[char; 2]; 6] =
    [[':', '='], ['<', '='], ['>', '='], ['<', '>'], ['.', '.'], ['*', '*']];

fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '+' | '-'
            | '*'
            | '/'
            | '='
            | '<'
            | '>'
            | '@'
            | '.'
            | '^'
            | ','
            | ':'
            | ';'
            | '('
            | ')'
            | '['
            | ']'
            | '}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(text: &str) -> Vec<(TokenKind, String)> {
        tokenize(text).into_iter().map(|token| (token.kind, token.text)).collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_owned())
    }

    #[test]
    fn empty_input_yields_only_end_of_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].text_range, TextRange::empty(TextSize::new(0)));
    }

    #[test]
    fn end_of_input_sits_at_input_length() {
        for text in ["program P;", "x := 'open", "{ never closed", "a\n\n", "(* x *) @ ?"] {
            let tokens = tokenize(text);
            let last = tokens.last().unwrap();

            assert!(last.is_eof(), "input: {text:?}");
            assert_eq!(last.start_offset(), TextSize::of(text), "input: {text:?}");
            assert_eq!(last.end_offset(), TextSize::of(text), "input: {text:?}");
            assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
        }
    }

    #[test]
    fn offsets_increase_and_stay_in_bounds() {
        let text = "unit U; interface\n uses A, B; var X: Integer; { c } (* d *) // e\nend.";
        let tokens = tokenize(text);

        for window in tokens.windows(2) {
            assert!(window[0].end_offset() <= window[1].start_offset());
            assert!(window[0].start_offset() < window[1].start_offset() || window[1].is_eof());
        }
        assert!(tokens.iter().all(|token| token.end_offset() <= TextSize::of(text)));
    }

    #[test]
    fn keywords_are_case_insensitive_and_keep_casing() {
        assert_eq!(
            kinds_and_texts("BEGIN Begin begin Beginning"),
            vec![
                tok(TokenKind::Keyword(Keyword::Begin), "BEGIN"),
                tok(TokenKind::Keyword(Keyword::Begin), "Begin"),
                tok(TokenKind::Keyword(Keyword::Begin), "begin"),
                tok(TokenKind::Identifier, "Beginning"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let text = "a // line\n{ brace } b (* paren\n comment *) c";
        assert_eq!(
            kinds_and_texts(text),
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Identifier, "c"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn comments_do_not_nest() {
        assert_eq!(
            kinds_and_texts("{ a { b } c }"),
            vec![
                tok(TokenKind::Identifier, "c"),
                tok(TokenKind::Punctuation, "}"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn open_brace_always_starts_a_comment() {
        assert_eq!(
            kinds_and_texts("a } b {c} d {"),
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Punctuation, "}"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Identifier, "d"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn two_character_operators_are_punctuation() {
        assert_eq!(
            kinds_and_texts("x := y <= z >= w <> 1..2 ** 3"),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Punctuation, ":="),
                tok(TokenKind::Identifier, "y"),
                tok(TokenKind::Punctuation, "<="),
                tok(TokenKind::Identifier, "z"),
                tok(TokenKind::Punctuation, ">="),
                tok(TokenKind::Identifier, "w"),
                tok(TokenKind::Punctuation, "<>"),
                tok(TokenKind::Number, "1..2"),
                tok(TokenKind::Punctuation, "**"),
                tok(TokenKind::Number, "3"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn single_character_symbols() {
        assert_eq!(
            kinds_and_texts("+ - * / = < > . : ; , ( ) [ ] ^ @"),
            vec![
                tok(TokenKind::Operator, "+"),
                tok(TokenKind::Operator, "-"),
                tok(TokenKind::Operator, "*"),
                tok(TokenKind::Operator, "/"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Operator, "<"),
                tok(TokenKind::Operator, ">"),
                tok(TokenKind::Punctuation, "."),
                tok(TokenKind::Punctuation, ":"),
                tok(TokenKind::Punctuation, ";"),
                tok(TokenKind::Punctuation, ","),
                tok(TokenKind::Punctuation, "("),
                tok(TokenKind::Punctuation, ")"),
                tok(TokenKind::Punctuation, "["),
                tok(TokenKind::Punctuation, "]"),
                tok(TokenKind::Punctuation, "^"),
                tok(TokenKind::Punctuation, "@"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn numbers_accept_any_run_of_digits_and_dots() {
        assert_eq!(
            kinds_and_texts("42 3.14 1.2.3"),
            vec![
                tok(TokenKind::Number, "42"),
                tok(TokenKind::Number, "3.14"),
                tok(TokenKind::Number, "1.2.3"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn strings_keep_their_quotes() {
        let tokens = tokenize("s := 'it' + \"x\";");
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "'it'");
        assert_eq!(tokens[2].text_range, TextRange::new(5.into(), 9.into()));
        assert_eq!(tokens[4].text, "\"x\"");
    }

    #[test]
    fn unterminated_string_stops_at_line_break() {
        let tokens = tokenize("'abc\nx");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "'abc'");
        assert_eq!(tokens[0].text_range, TextRange::new(0.into(), 4.into()));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unknown_characters_are_dropped() {
        assert_eq!(
            kinds_and_texts("a ? b # c ~ \u{1F600}"),
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Identifier, "c"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn positions_are_tracked_per_line() {
        let tokens = tokenize("program P;\n  var X: Integer;");
        let var = &tokens[3];

        assert!(var.is_keyword(Keyword::Var));
        assert_eq!((var.line, var.column, var.end_column), (2, 3, 6));
        assert_eq!(var.range(), Range::new(Position::new(1, 2), Position::new(1, 5)));

        let semicolon = &tokens[2];
        assert!(semicolon.is_punctuation(";"));
        assert_eq!(semicolon.start(), Position::new(0, 9));
    }

    #[test]
    fn streaming_stops_after_end_of_input() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(tokenizer.next().map(|token| token.kind), Some(TokenKind::Identifier));
        assert_eq!(tokenizer.next().map(|token| token.kind), Some(TokenKind::EndOfInput));
        assert_eq!(tokenizer.next(), None);
    }
}
