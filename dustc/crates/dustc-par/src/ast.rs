//! AST node definitions (`spec.md` §3.4).
//!
//! A tagged sum rather than a C-style tagged union (Design Note §9): every
//! variant names exactly the payload it carries, so field access on the
//! wrong variant is a compile error instead of undefined behavior.

/// Operator kinds shared by [`Node::BinOp`] and [`Node::UnaryOp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    And,
    Or,
    Xor,
    Not,
    Range,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    In,
}

impl OpKind {
    /// The source symbol for this operator, used by the printer
    /// (`spec.md` §4.5: "Enumerations of operator kinds use the source
    /// symbol").
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Mod => "%",
            OpKind::Pow => "^",
            OpKind::And => "and",
            OpKind::Or => "or",
            OpKind::Xor => "xor",
            OpKind::Not => "not",
            OpKind::Range => "..",
            OpKind::Eq => "==",
            OpKind::Neq => "!=",
            OpKind::Lt => "<",
            OpKind::Le => "<=",
            OpKind::Gt => ">",
            OpKind::Ge => ">=",
            OpKind::In => "in",
        }
    }

    /// Map a lexed operator symbol back to its [`OpKind`]. Panics on an
    /// unrecognized symbol — callers only invoke this after their own
    /// precedence-level match has already confirmed membership.
    pub fn from_symbol(symbol: &str) -> OpKind {
        match symbol {
            "+" => OpKind::Add,
            "-" => OpKind::Sub,
            "*" => OpKind::Mul,
            "/" => OpKind::Div,
            "%" => OpKind::Mod,
            "^" => OpKind::Pow,
            "and" => OpKind::And,
            "or" => OpKind::Or,
            "xor" => OpKind::Xor,
            "not" => OpKind::Not,
            ".." => OpKind::Range,
            "==" => OpKind::Eq,
            "!=" => OpKind::Neq,
            "<" => OpKind::Lt,
            "<=" => OpKind::Le,
            ">" => OpKind::Gt,
            ">=" => OpKind::Ge,
            "in" => OpKind::In,
            other => unreachable!("not a binary/unary operator symbol: {other}"),
        }
    }
}

/// A single AST node (`spec.md` §3.4).
///
/// Parent nodes exclusively own their children (`Box`); there are no
/// back-references and no cycles.
#[derive(Debug, Clone)]
pub enum Node {
    Integer(i64),
    Float(f64),
    String(String),
    Var(String),
    /// A leaf type name in declaration position, e.g. `int32`.
    Primitive(String),
    Array {
        elements: Vec<Node>,
        empty: bool,
    },
    Decl {
        ty: Box<Node>,
        name: String,
        init: Box<Node>,
    },
    DeclNoInit {
        ty: Box<Node>,
        name: String,
    },
    Assign {
        name: String,
        op: String,
        expr: Box<Node>,
    },
    BinOp {
        op: OpKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryOp {
        op: OpKind,
        operand: Box<Node>,
    },
    Import {
        module: String,
    },
    ImportFrom {
        module: String,
        member: String,
    },
    /// Dot access: `parent.child`.
    Child {
        parent: Box<Node>,
        child: Box<Node>,
    },
    Subscript {
        base: Box<Node>,
        index: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Option<Vec<Node>>,
    },
    /// The callee leaf of a [`Node::Call`] — distinct from [`Node::Var`]
    /// so printers can label it (`spec.md` §3.4).
    FuncBase(String),
    Enum {
        name: String,
        body: Box<Node>,
    },
    Body {
        stmts: Vec<Node>,
        /// Number of tokens consumed producing this body. Metadata the
        /// parser consults while advancing its cursor; not otherwise
        /// semantic (`spec.md` §3.4).
        tokens_consumed: usize,
    },
    GenType {
        args: Vec<Node>,
        tokens_consumed: usize,
    },
    If {
        cond: Box<Node>,
        body: Box<Node>,
    },
    Elif {
        cond: Box<Node>,
        body: Box<Node>,
    },
    Else {
        body: Box<Node>,
    },
    Repeat {
        count: Box<Node>,
        body: Box<Node>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    For {
        var: Box<Node>,
        iter: Box<Node>,
        body: Box<Node>,
    },
}

impl Node {
    /// Depth-first traversal callback, used by tests to assert the AST is
    /// acyclic (`spec.md` §8: "No AST cycles exist; DFS from the root
    /// terminates").
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Integer(_)
            | Node::Float(_)
            | Node::String(_)
            | Node::Var(_)
            | Node::Primitive(_)
            | Node::FuncBase(_)
            | Node::Import { .. } => vec![],
            Node::Array { elements, .. } => elements.iter().collect(),
            Node::Decl { ty, init, .. } => vec![ty, init],
            Node::DeclNoInit { ty, .. } => vec![ty],
            Node::Assign { expr, .. } => vec![expr],
            Node::BinOp { left, right, .. } => vec![left, right],
            Node::UnaryOp { operand, .. } => vec![operand],
            Node::ImportFrom { .. } => vec![],
            Node::Child { parent, child } => vec![parent, child],
            Node::Subscript { base, index } => vec![base, index],
            Node::Call { callee, args } => {
                let mut v = vec![callee.as_ref()];
                if let Some(args) = args {
                    v.extend(args.iter());
                }
                v
            }
            Node::Enum { body, .. } => vec![body],
            Node::Body { stmts, .. } => stmts.iter().collect(),
            Node::GenType { args, .. } => args.iter().collect(),
            Node::If { cond, body } | Node::Elif { cond, body } => vec![cond, body],
            Node::Else { body } => vec![body],
            Node::Repeat { count, body } => vec![count, body],
            Node::While { cond, body } => vec![cond, body],
            Node::For { var, iter, body } => vec![var, iter, body],
        }
    }
}
