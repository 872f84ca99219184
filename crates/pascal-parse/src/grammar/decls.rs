use pascal_syntax::ast::{Node, NodeKind};
use pascal_syntax::{Keyword, KeywordSet};

use super::items::routine;
use crate::parser::{Parser, Result};

/// Tokens that close a var/const/type section.
const SECTION_END: KeywordSet = KeywordSet::new([
    Keyword::Begin,
    Keyword::Procedure,
    Keyword::Function,
    Keyword::Var,
    Keyword::Const,
    Keyword::Type,
    Keyword::Implementation,
    Keyword::End,
    Keyword::Initialization,
    Keyword::Finalization,
]);

/// `uses <name> {, <name>} ;`
pub(super) fn uses_clause(p: &mut Parser) -> Result<Vec<Node>> {
    if !p.at_keyword(Keyword::Uses) {
        return Ok(Vec::new());
    }
    p.advance();

    let mut units = Vec::new();
    loop {
        let name = p.expect_ident()?;
        units.push(Node::leaf(NodeKind::UnitReference, name.text, name.range));

        if !p.eat_punctuation(",") {
            break;
        }
    }
    p.eat_punctuation(";");

    Ok(units)
}

/// Whether routines in a declaration list carry bodies. A unit's interface
/// lists headers only.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum Routines {
    WithBodies,
    HeadersOnly,
}

/// Var, const and type sections and nested routines, until anything else.
pub(super) fn declarations(p: &mut Parser, routines: Routines) -> Result<Vec<Node>> {
    let mut decls = Vec::new();

    loop {
        match p.current().keyword() {
            Some(Keyword::Var) => section(p, NodeKind::VarDeclaration, &mut decls)?,
            Some(Keyword::Const) => section(p, NodeKind::ConstDeclaration, &mut decls)?,
            Some(Keyword::Type) => section(p, NodeKind::TypeDeclaration, &mut decls)?,
            Some(Keyword::Procedure | Keyword::Function) => decls.push(routine(p, routines)?),
            _ => break,
        }
    }

    Ok(decls)
}

/// `<section keyword> { <name> {, <name>} (: | =) <rest> ; }`
///
/// Each name becomes its own leaf spanning from the name to the line's `;`.
fn section(p: &mut Parser, kind: NodeKind, decls: &mut Vec<Node>) -> Result<()> {
    p.advance();

    while !p.at_eof() && !p.at_any(&SECTION_END) {
        let mut names = vec![p.expect_ident()?];
        while p.eat_punctuation(",") {
            names.push(p.expect_ident()?);
        }

        if !p.eat_punctuation(":") {
            p.eat_operator("=");
        }
        skip_rest(p);
        p.eat_punctuation(";");

        let end = p.last_range();
        decls.extend(
            names.into_iter().map(|name| Node::leaf(kind, name.text, name.range.cover(end))),
        );
    }

    Ok(())
}

/// Skips the right-hand side of a declaration line up to its `;`.
///
/// Brackets and `record`/`object`/`class` bodies nest, so their inner `;`
/// tokens do not end the line. At depth zero the first token is always taken
/// (`T = procedure(...)` is a type, not a routine); later section keywords stop
/// the scan.
fn skip_rest(p: &mut Parser) {
    let mut depth = 0usize;
    let mut first = true;

    while !p.at_eof() {
        let token = p.current();

        if depth == 0 && (token.is_punctuation(";") || (!first && p.at_any(&SECTION_END))) {
            break;
        }

        match token.keyword() {
            Some(Keyword::Record) => depth += 1,
            Some(Keyword::Class | Keyword::Object) if opens_body(p) => depth += 1,
            Some(Keyword::End) => depth = depth.saturating_sub(1),
            _ if token.is_punctuation("(") || token.is_punctuation("[") => depth += 1,
            _ if token.is_punctuation(")") || token.is_punctuation("]") => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }

        p.advance();
        first = false;
    }
}

/// Whether the `class`/`object` under the cursor starts a member list closed
/// by `end`, as opposed to `class;`, `class of T` or `class(TBase);`.
fn opens_body(p: &Parser) -> bool {
    let mut n = 1;

    if p.nth(n).is_punctuation("(") {
        let mut depth = 0usize;
        loop {
            let token = p.nth(n);
            if token.is_eof() {
                return false;
            }
            if token.is_punctuation("(") {
                depth += 1;
            } else if token.is_punctuation(")") {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            n += 1;
        }
        n += 1;
    }

    let next = p.nth(n);
    !(next.is_punctuation(";") || next.is_keyword(Keyword::Of) || next.is_eof())
}
