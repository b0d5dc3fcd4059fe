//! Syntax tree types shared by the parser and code generator.
//!
//! Only the data model lives here. Nodes are built by the recursive-descent
//! parser and lowered by the code generator, both of which drive the token
//! cursor in `mcc_parse`.

/// Kind of a syntax tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `=`
    Assign,
    /// `return`
    Return,
    /// `if`
    If,
    /// Expression statement.
    ExprStmt,
    /// Local variable reference.
    LocalVar,
    /// Integer literal.
    Num,
}

impl NodeKind {
    /// Map a binary operator's source text to its node kind.
    ///
    /// `>` and `>=` have no kind of their own: the parser swaps operands
    /// and uses `Lt`/`Le`.
    pub fn from_binary_op(op: &str) -> Option<NodeKind> {
        match op {
            "+" => Some(NodeKind::Add),
            "-" => Some(NodeKind::Sub),
            "*" => Some(NodeKind::Mul),
            "/" => Some(NodeKind::Div),
            "==" => Some(NodeKind::Eq),
            "!=" => Some(NodeKind::Ne),
            "<" => Some(NodeKind::Lt),
            "<=" => Some(NodeKind::Le),
            "=" => Some(NodeKind::Assign),
            _ => None,
        }
    }
}

/// A syntax tree node.
///
/// `value` is meaningful for `Num`, `offset` for `LocalVar` (bytes below
/// the frame base).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub lhs: Option<Box<Node>>,
    pub rhs: Option<Box<Node>>,
    pub value: i64,
    pub offset: u32,
}

impl Node {
    fn leaf(kind: NodeKind) -> Self {
        Node {
            kind,
            lhs: None,
            rhs: None,
            value: 0,
            offset: 0,
        }
    }

    /// Binary node with both operands.
    pub fn binary(kind: NodeKind, lhs: Node, rhs: Node) -> Self {
        Node {
            lhs: Some(Box::new(lhs)),
            rhs: Some(Box::new(rhs)),
            ..Node::leaf(kind)
        }
    }

    /// Node with a single operand in `lhs` (`return`, expression statements).
    pub fn unary(kind: NodeKind, operand: Node) -> Self {
        Node {
            lhs: Some(Box::new(operand)),
            ..Node::leaf(kind)
        }
    }

    pub fn num(value: i64) -> Self {
        Node {
            value,
            ..Node::leaf(NodeKind::Num)
        }
    }

    pub fn local_var(offset: u32) -> Self {
        Node {
            offset,
            ..Node::leaf(NodeKind::LocalVar)
        }
    }
}

/// A parsed program: statements in source order.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub stmts: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Program { stmts: Vec::new() }
    }

    pub fn push(&mut self, stmt: Node) {
        self.stmts.push(stmt);
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.stmts.iter()
    }
}
