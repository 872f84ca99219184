use std::fs;
use std::path::{Path, PathBuf};

use expect_test::expect_file;
use pascal_syntax::ast::{Node, NodeKind};
use pascal_syntax::{Position, Range};

use crate::{parse, try_parse};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "pas" {
                    let expected = path.with_extension("ast");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

#[test]
fn parse_test_data() {
    let cases = TestCase::list();
    assert!(!cases.is_empty());

    for case in cases {
        let actual = match try_parse(&case.text) {
            Ok(tree) => tree.to_string(),
            Err(error) => format!("error: {error}\n"),
        };
        expect_file![&case.expected].assert_eq(&actual);
    }
}

fn names(node: &Node) -> Vec<(NodeKind, Option<&str>)> {
    node.children().iter().map(|child| (child.kind(), child.name())).collect()
}

#[test]
fn minimal_program() {
    let tree = parse("program P; begin end.").unwrap();

    assert_eq!(tree.kind(), NodeKind::Program);
    assert_eq!(tree.name(), Some("P"));
    assert_eq!(names(&tree), [(NodeKind::Block, None)]);
    assert_eq!(tree.range(), Range::new(Position::new(0, 0), Position::new(0, 21)));
}

#[test]
fn unit_with_interface_and_implementation() {
    let tree = parse("unit U; interface var X: Integer; implementation end.").unwrap();

    assert_eq!(tree.kind(), NodeKind::Unit);
    assert_eq!(tree.name(), Some("U"));
    assert_eq!(names(&tree), [(NodeKind::InterfaceSection, None)]);

    let interface = &tree.children()[0];
    assert_eq!(
        names(interface),
        [(NodeKind::VarDeclaration, Some("X")), (NodeKind::ImplementationSection, None)]
    );
}

#[test]
fn missing_program_name_is_a_parse_failure() {
    assert_eq!(parse("program ;"), None);
    assert_eq!(try_parse("program ;").unwrap_err().message(), "expected identifier");
}

#[test]
fn unrecognized_start_yields_nothing() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("begin end."), None);
    assert_eq!(parse("library L; begin end."), None);
}

#[test]
fn keywords_are_recognized_in_any_case() {
    let tree = parse("PROGRAM Shout; VAR Loud: Integer; BEGIN END.").unwrap();
    assert_eq!(
        names(&tree),
        [(NodeKind::VarDeclaration, Some("Loud")), (NodeKind::Block, None)]
    );
}

#[test]
fn parameters_are_not_kept() {
    let tree = parse("procedure P(var A: Integer; const B, C: string; out D: Real); begin end;")
        .unwrap();

    assert_eq!(tree.kind(), NodeKind::Procedure);
    assert_eq!(names(&tree), [(NodeKind::Block, None)]);
}

#[test]
fn broken_parameter_list_aborts() {
    assert_eq!(parse("procedure P(; begin end;"), None);
    assert_eq!(parse("procedure P(A: Integer"), None);
}

#[test]
fn block_body_is_not_interpreted() {
    let tree = parse("program P; begin if X then Y := 1 else Z(2, 3); end.").unwrap();
    let block = &tree.children()[0];

    assert_eq!(block.kind(), NodeKind::Block);
    assert!(block.children().is_empty());
}

#[test]
fn first_end_closes_a_block() {
    let tree = parse("program P; begin begin end; X end.").unwrap();
    let block = &tree.children()[0];

    assert_eq!(block.range(), Range::new(Position::new(0, 11), Position::new(0, 26)));
    assert_eq!(tree.range().end, Position::new(0, 26));
}

#[test]
fn typed_constants_and_lists() {
    let tree = parse("program P; const A: Integer = 1; B = 'b'; var X, Y, Z: Real; begin end.")
        .unwrap();

    assert_eq!(
        names(&tree),
        [
            (NodeKind::ConstDeclaration, Some("A")),
            (NodeKind::ConstDeclaration, Some("B")),
            (NodeKind::VarDeclaration, Some("X")),
            (NodeKind::VarDeclaration, Some("Y")),
            (NodeKind::VarDeclaration, Some("Z")),
            (NodeKind::Block, None),
        ]
    );
}

#[test]
fn end_closes_a_declaration_section() {
    let tree = parse("program P; var X: Integer; end.").unwrap();
    assert_eq!(names(&tree), [(NodeKind::VarDeclaration, Some("X"))]);
    assert_eq!(tree.range().end, Position::new(0, 26));

    let tree = parse("unit U; interface implementation var Count: Integer; end.").unwrap();
    let interface = &tree.children()[0];
    let implementation = &interface.children()[0];

    assert_eq!(implementation.kind(), NodeKind::ImplementationSection);
    assert_eq!(names(implementation), [(NodeKind::VarDeclaration, Some("Count"))]);
    assert_eq!(tree.range().end, Position::new(0, 57));
}

#[test]
fn initialization_closes_a_declaration_section() {
    let tree = parse(
        "unit U; interface implementation const Limit = 3; initialization begin end; end.",
    )
    .unwrap();
    let interface = &tree.children()[0];

    assert_eq!(
        names(interface),
        [(NodeKind::ImplementationSection, None), (NodeKind::Block, None)]
    );
    assert_eq!(
        names(&interface.children()[0]),
        [(NodeKind::ConstDeclaration, Some("Limit"))]
    );
}

#[test]
fn procedural_types_are_types() {
    let tree = parse(
        "program P; type TProc = procedure(X: Integer) of object; TCb = function: Boolean; \
         begin end.",
    )
    .unwrap();

    assert_eq!(
        names(&tree),
        [
            (NodeKind::TypeDeclaration, Some("TProc")),
            (NodeKind::TypeDeclaration, Some("TCb")),
            (NodeKind::Block, None),
        ]
    );
}

#[test]
fn forward_classes_do_not_nest() {
    let tree =
        parse("program P; type TA = class; TB = class of TA; TC = class(TA); begin end.").unwrap();

    assert_eq!(
        names(&tree),
        [
            (NodeKind::TypeDeclaration, Some("TA")),
            (NodeKind::TypeDeclaration, Some("TB")),
            (NodeKind::TypeDeclaration, Some("TC")),
            (NodeKind::Block, None),
        ]
    );
}

#[test]
fn nested_routines() {
    let tree = parse(
        "procedure Outer; var A: Integer; function Inner(N: Integer): Integer; begin end; \
         begin end;",
    )
    .unwrap();

    assert_eq!(
        names(&tree),
        [
            (NodeKind::VarDeclaration, Some("A")),
            (NodeKind::Function, Some("Inner")),
            (NodeKind::Block, None),
        ]
    );
    assert_eq!(names(&tree.children()[1]), [(NodeKind::Block, None)]);
}

#[test]
fn interface_lists_routine_headers() {
    let tree = parse(
        "unit U; interface procedure A; function B: Integer; \
         implementation procedure A; begin end; function B: Integer; begin end; end.",
    )
    .unwrap();
    let interface = &tree.children()[0];

    assert_eq!(
        names(interface),
        [
            (NodeKind::Procedure, Some("A")),
            (NodeKind::Function, Some("B")),
            (NodeKind::ImplementationSection, None),
        ]
    );
    assert!(interface.children()[0].children().is_empty());

    let implementation = &interface.children()[2];
    assert_eq!(
        names(implementation),
        [(NodeKind::Procedure, Some("A")), (NodeKind::Function, Some("B"))]
    );
    assert_eq!(names(&implementation.children()[1]), [(NodeKind::Block, None)]);
}

#[test]
fn missing_routine_name_aborts_the_whole_parse() {
    assert_eq!(parse("program P; procedure ; begin end; begin end."), None);
}

#[test]
fn var_line_without_a_name_aborts() {
    assert_eq!(parse("program P; var : Integer; begin end."), None);
}
