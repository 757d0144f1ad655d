// AST (Abstract Syntax Tree) definitions for the expression language

use std::fmt;
use std::mem;
use std::sync::Arc;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub filename: Arc<str>,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(filename: Arc<str>, line: usize, column: usize) -> Self {
        Self {
            filename,
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// AST nodes representing expressions
///
/// The set of node kinds is closed: the fold step and the evaluator both
/// match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation, // operator token
    },
    Assign {
        target: String,
        value: Box<AstNode>,
        location: SourceLocation, // '=' token
    },
    VarRef {
        name: String,
        location: SourceLocation,
    },
    IntLiteral {
        value: i64,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Returns the source location this node was built from.
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::BinaryOp { location, .. }
            | AstNode::Assign { location, .. }
            | AstNode::VarRef { location, .. }
            | AstNode::IntLiteral { location, .. } => location,
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, AstNode::VarRef { .. } | AstNode::IntLiteral { .. })
    }

    /// Move every non-leaf child into `out`, leaving a literal in its place.
    fn detach_subtrees(&mut self, out: &mut Vec<AstNode>) {
        match self {
            AstNode::BinaryOp {
                left,
                right,
                location,
                ..
            } => {
                for child in [left, right] {
                    if !child.is_leaf() {
                        out.push(mem::replace(child.as_mut(), placeholder(location)));
                    }
                }
            }
            AstNode::Assign {
                value, location, ..
            } => {
                if !value.is_leaf() {
                    out.push(mem::replace(value.as_mut(), placeholder(location)));
                }
            }
            AstNode::VarRef { .. } | AstNode::IntLiteral { .. } => {}
        }
    }
}

fn placeholder(location: &SourceLocation) -> AstNode {
    AstNode::IntLiteral {
        value: 0,
        location: location.clone(),
    }
}

// Operator chains fold into left-deep trees, one level per operator, so
// teardown flattens the tree instead of recursing through the boxes.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_subtrees(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_subtrees(&mut detached);
        }
    }
}

/// Renders the tree fully parenthesised, e.g. `((8 - 4) - 2)`.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a AstNode),
            Text(&'a str),
            Op(BinOp),
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Node(AstNode::IntLiteral { value, .. }) => write!(f, "{}", value)?,
                Piece::Node(AstNode::VarRef { name, .. }) => f.write_str(name)?,
                Piece::Node(AstNode::BinaryOp {
                    op, left, right, ..
                }) => pending.extend([
                    Piece::Text(")"),
                    Piece::Node(right),
                    Piece::Op(*op),
                    Piece::Node(left),
                    Piece::Text("("),
                ]),
                Piece::Node(AstNode::Assign { target, value, .. }) => pending.extend([
                    Piece::Text(")"),
                    Piece::Node(value),
                    Piece::Text(" = "),
                    Piece::Text(target),
                    Piece::Text("("),
                ]),
            }
        }
        Ok(())
    }
}

/// A parsed program: one or more `;`-separated units evaluated in order
/// against a shared environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    units: Vec<AstNode>,
}

impl Program {
    /// Create a program holding a single unit.
    pub fn new(first: AstNode) -> Self {
        Program { units: vec![first] }
    }

    pub fn push(&mut self, unit: AstNode) {
        self.units.push(unit);
    }

    /// All units in source order; never empty.
    pub fn units(&self) -> &[AstNode] {
        &self.units
    }
}

/// One unit per line, each terminated by `;` except the last.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, unit) in self.units.iter().enumerate() {
            if index > 0 {
                writeln!(f, ";")?;
            }
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}
