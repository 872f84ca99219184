use pascal_syntax::Keyword;
use pascal_syntax::ast::Node;

use self::decls::Routines;
use crate::parser::{Parser, Result};

mod decls;
mod items;

pub(crate) fn root(p: &mut Parser) -> Result<Node> {
    match p.current().keyword() {
        Some(Keyword::Program) => items::program(p),
        Some(Keyword::Unit) => items::unit(p),
        Some(Keyword::Procedure | Keyword::Function) => items::routine(p, Routines::WithBodies),
        _ => Err(p.error("expected `program`, `unit`, `procedure` or `function`")),
    }
}
