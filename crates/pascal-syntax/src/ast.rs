use std::fmt;

use crate::Range;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Program,
    Unit,
    Procedure,
    Function,
    VarDeclaration,
    TypeDeclaration,
    ConstDeclaration,
    /// A unit named by a `uses` clause.
    UnitReference,
    Block,
    InterfaceSection,
    ImplementationSection,
}

impl NodeKind {
    /// Leaf kinds never carry children.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::VarDeclaration
                | Self::TypeDeclaration
                | Self::ConstDeclaration
                | Self::UnitReference
        )
    }
}

/// A node of the declaration tree.
///
/// The tree owns its nodes outright and has no parent links; consumers that
/// need a parent walk down from the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    name: Option<String>,
    range: Range,
    children: Vec<Node>,
}

impl Node {
    pub fn leaf(kind: NodeKind, name: impl Into<String>, range: Range) -> Self {
        debug_assert!(kind.is_leaf(), "{kind:?} is a container kind");
        Self { kind, name: Some(name.into()), range, children: Vec::new() }
    }

    pub fn container(
        kind: NodeKind,
        name: Option<String>,
        range: Range,
        children: Vec<Node>,
    ) -> Self {
        debug_assert!(!kind.is_leaf(), "{kind:?} is a leaf kind");
        Self { kind, name, range, children }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Pre-order traversal starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn go(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}{:?}", "", node.kind, indent = depth * 2)?;
            if let Some(name) = &node.name {
                write!(f, " {name:?}")?;
            }
            writeln!(f, " {}", node.range)?;

            for child in &node.children {
                go(child, depth + 1, f)?;
            }

            Ok(())
        }

        go(self, 0, f)
    }
}
