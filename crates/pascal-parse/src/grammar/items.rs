use pascal_syntax::ast::{Node, NodeKind};
use pascal_syntax::{Keyword, KeywordSet, TokenKind};

use super::decls::{Routines, declarations, uses_clause};
use crate::parser::{Ident, Parser, Result};

const DIRECTIVES: [&str; 13] = [
    "forward",
    "overload",
    "inline",
    "virtual",
    "override",
    "abstract",
    "reintroduce",
    "static",
    "external",
    "cdecl",
    "stdcall",
    "register",
    "assembler",
];

/// Directives that announce a routine without a body.
const BODILESS: [&str; 2] = ["forward", "external"];

/// `program <name> ; [uses] {declaration} [block] [.]`
pub(super) fn program(p: &mut Parser) -> Result<Node> {
    let start = p.expect_keyword(Keyword::Program)?;
    let name = p.expect_ident()?;
    p.eat_punctuation(";");

    let mut children = uses_clause(p)?;
    children.extend(declarations(p, Routines::WithBodies)?);

    if let Some(block) = block(p) {
        children.push(block);
        p.eat_punctuation(".");
    }

    Ok(Node::container(NodeKind::Program, Some(name.text), start.cover(p.last_range()), children))
}

/// `unit <name> ; interface [uses] {declaration}
///  [implementation [uses] {declaration}] [initialization [block]] [end .]`
///
/// The implementation section and the initialization block hang off the
/// interface section, which is the unit's only child.
pub(super) fn unit(p: &mut Parser) -> Result<Node> {
    let start = p.expect_keyword(Keyword::Unit)?;
    let name = p.expect_ident()?;
    p.eat_punctuation(";");

    let interface = p.expect_keyword(Keyword::Interface)?;
    let mut children = uses_clause(p)?;
    children.extend(declarations(p, Routines::HeadersOnly)?);

    if p.at_keyword(Keyword::Implementation) {
        let implementation = p.advance();
        let mut section = uses_clause(p)?;
        section.extend(declarations(p, Routines::WithBodies)?);

        children.push(Node::container(
            NodeKind::ImplementationSection,
            None,
            implementation.cover(p.last_range()),
            section,
        ));
    }

    if p.at_keyword(Keyword::Initialization) {
        p.advance();
        if let Some(block) = block(p) {
            children.push(block);
            p.eat_punctuation(";");
        }
    }

    let interface = Node::container(
        NodeKind::InterfaceSection,
        None,
        interface.cover(p.last_range()),
        children,
    );

    if p.at_keyword(Keyword::End) {
        p.advance();
        p.eat_punctuation(".");
    }

    Ok(Node::container(
        NodeKind::Unit,
        Some(name.text),
        start.cover(p.last_range()),
        vec![interface],
    ))
}

/// `(procedure | function) <name> [( params )] [: <type>] ; {directive ;}
///  {declaration} [block] ;`
///
/// Parameters and the result type are checked for shape but not kept. Only
/// the header is read when `routines` is [`Routines::HeadersOnly`].
pub(super) fn routine(p: &mut Parser, routines: Routines) -> Result<Node> {
    let kind = match p.current().keyword() {
        Some(Keyword::Procedure) => NodeKind::Procedure,
        Some(Keyword::Function) => NodeKind::Function,
        _ => return Err(p.error("expected `procedure` or `function`")),
    };
    let start = p.advance();
    let name = qualified_name(p)?;

    if p.at_punctuation("(") {
        parameters(p)?;
    }

    if p.eat_punctuation(":") {
        type_name(p)?;
    }
    p.eat_punctuation(";");

    let mut children = Vec::new();
    if !directives(p) && routines == Routines::WithBodies {
        children = declarations(p, routines)?;
        if let Some(block) = block(p) {
            children.push(block);
        }
        p.eat_punctuation(";");
    }

    Ok(Node::container(kind, Some(name.text), start.cover(p.last_range()), children))
}

/// `TClass.Method` style names are kept whole.
fn qualified_name(p: &mut Parser) -> Result<Ident> {
    let mut name = p.expect_ident()?;

    while p.at_punctuation(".") && p.nth(1).kind == TokenKind::Identifier {
        p.advance();
        let member = p.expect_ident()?;
        name.text.push('.');
        name.text.push_str(&member.text);
        name.range = name.range.cover(member.range);
    }

    Ok(name)
}

fn parameters(p: &mut Parser) -> Result<()> {
    p.advance();

    while !p.at_punctuation(")") {
        if p.at_keyword(Keyword::Var) || p.at_keyword(Keyword::Const) || p.at_word("out") {
            p.advance();
        }

        p.expect_ident()?;
        while p.eat_punctuation(",") {
            p.expect_ident()?;
        }

        if p.eat_punctuation(":") {
            type_name(p)?;
        }
        if p.eat_operator("=") {
            p.advance();
        }

        p.eat_punctuation(";");
    }

    p.advance();
    Ok(())
}

/// `<ident>` or `array of <ident>` / `array of const`.
fn type_name(p: &mut Parser) -> Result<()> {
    if p.at_word("array") && p.nth(1).is_keyword(Keyword::Of) {
        p.advance();
        p.advance();
        if p.at_keyword(Keyword::Const) {
            p.advance();
            return Ok(());
        }
    }

    p.expect_ident().map(drop)
}

/// Skips `<directive> ... ;` runs after a routine header. Returns whether a
/// directive declared the routine bodiless.
fn directives(p: &mut Parser) -> bool {
    const STOP: KeywordSet = KeywordSet::new([
        Keyword::Begin,
        Keyword::Var,
        Keyword::Const,
        Keyword::Type,
        Keyword::Procedure,
        Keyword::Function,
    ]);

    let mut bodiless = false;

    while let Some(directive) = DIRECTIVES.into_iter().find(|directive| p.at_word(directive)) {
        bodiless |= BODILESS.contains(&directive);
        p.advance();

        while !p.at_eof() && !p.at_punctuation(";") && !p.at_any(&STOP) {
            p.advance();
        }
        p.eat_punctuation(";");
    }

    bodiless
}

/// `begin {any token} end`. The body is skipped; the first `end` closes the
/// block. A block cut off by end of input closes at the last token.
pub(super) fn block(p: &mut Parser) -> Option<Node> {
    if !p.at_keyword(Keyword::Begin) {
        return None;
    }

    let start = p.advance();
    while !p.at_keyword(Keyword::End) && !p.at_eof() {
        p.advance();
    }
    if p.at_keyword(Keyword::End) {
        p.advance();
    }

    Some(Node::container(NodeKind::Block, None, start.cover(p.last_range()), Vec::new()))
}
