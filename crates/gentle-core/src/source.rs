//! The typed source subset.
//!
//! These nodes are what the external front end produces after parsing a Python file. Only the
//! shapes the lowering engine understands are modelled; any other host construct arrives as an
//! `Unsupported` node carrying its host name so diagnostics can still point at it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub body: Vec<Item>,
}

impl Module {
    pub fn new(filename: Option<String>, body: Vec<Item>) -> Self {
        Self { filename, body }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.body.iter().filter_map(|item| match item {
            Item::FunctionDef(def) => Some(def),
            Item::Other { .. } => None,
        })
    }
}

/// A top-level item. Only function definitions are translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    FunctionDef(FunctionDef),
    Other {
        construct: String,
        #[serde(default)]
        line: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub returns: Option<Annotation>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub line: u32,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
            line: 0,
        }
    }

    pub fn param(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        self.params.push(Param {
            name: name.into(),
            annotation: Some(annotation),
        });
        self
    }

    pub fn returns(mut self, annotation: Annotation) -> Self {
        self.returns = Some(annotation);
        self
    }

    pub fn body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }

    pub fn at(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<Annotation>,
}

/// A type annotation as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    Name(String),
    /// The `None` literal.
    Null,
    Subscript { base: String, index: Box<Annotation> },
    /// A tuple-shaped slice, e.g. the `float, int` in `tuple[float, int]`.
    Tuple(Vec<Annotation>),
}

impl Annotation {
    pub fn name(id: impl Into<String>) -> Self {
        Annotation::Name(id.into())
    }

    pub fn int() -> Self {
        Annotation::name("int")
    }

    pub fn float() -> Self {
        Annotation::name("float")
    }

    pub fn subscript(base: impl Into<String>, index: Annotation) -> Self {
        Annotation::Subscript {
            base: base.into(),
            index: Box::new(index),
        }
    }

    pub fn array(element: Annotation) -> Self {
        Annotation::subscript("Array", element)
    }

    pub fn tuple_of(elements: Vec<Annotation>) -> Self {
        Annotation::subscript("tuple", Annotation::Tuple(elements))
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Name(id) => write!(f, "{}", id),
            Annotation::Null => write!(f, "None"),
            Annotation::Subscript { base, index } => write!(f, "{}[{}]", base, index),
            Annotation::Tuple(elements) => {
                let parts: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    #[serde(default)]
    pub line: u32,
    #[serde(flatten)]
    pub kind: StmtKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StmtKind {
    Return {
        #[serde(default)]
        value: Option<Expr>,
    },
    AnnAssign {
        target: String,
        annotation: Annotation,
        #[serde(default)]
        value: Option<Expr>,
    },
    AugAssign {
        target: Expr,
        op: BinOp,
        value: Expr,
    },
    /// Plain `x = ...`; never accepted.
    Assign {
        targets: Vec<String>,
        value: Expr,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
        #[serde(default)]
        orelse: Vec<Stmt>,
    },
    For {
        target: String,
        iter: Expr,
        body: Vec<Stmt>,
        #[serde(default)]
        orelse: Vec<Stmt>,
    },
    Unsupported {
        construct: String,
    },
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Self { line: 0, kind }
    }

    pub fn at(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::new(StmtKind::Return { value: Some(value) })
    }

    pub fn ret_void() -> Self {
        Stmt::new(StmtKind::Return { value: None })
    }

    pub fn ann_assign(target: impl Into<String>, annotation: Annotation, value: Expr) -> Self {
        Stmt::new(StmtKind::AnnAssign {
            target: target.into(),
            annotation,
            value: Some(value),
        })
    }

    pub fn aug_assign(target: Expr, op: BinOp, value: Expr) -> Self {
        Stmt::new(StmtKind::AugAssign { target, op, value })
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::new(StmtKind::Assign {
            targets: vec![target.into()],
            value,
        })
    }

    pub fn if_(test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Self {
        Stmt::new(StmtKind::If { test, body, orelse })
    }

    pub fn for_(target: impl Into<String>, iter: Expr, body: Vec<Stmt>) -> Self {
        Stmt::new(StmtKind::For {
            target: target.into(),
            iter,
            body,
            orelse: Vec::new(),
        })
    }

    pub fn unsupported(construct: impl Into<String>) -> Self {
        Stmt::new(StmtKind::Unsupported {
            construct: construct.into(),
        })
    }

    /// Host name of the construct, used in diagnostics.
    pub fn construct(&self) -> &str {
        match &self.kind {
            StmtKind::Return { .. } => "Return",
            StmtKind::AnnAssign { .. } => "AnnAssign",
            StmtKind::AugAssign { .. } => "AugAssign",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::If { .. } => "If",
            StmtKind::For { .. } => "For",
            StmtKind::Unsupported { construct } => construct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(default)]
    pub line: u32,
    #[serde(flatten)]
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExprKind {
    Constant {
        value: Literal,
    },
    Name {
        id: String,
    },
    BinOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Subscript {
        value: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        func: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    IfExp {
        test: Box<Expr>,
        body: Box<Expr>,
        orelse: Box<Expr>,
    },
    Tuple {
        elts: Vec<Expr>,
    },
    Unsupported {
        construct: String,
    },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self { line: 0, kind }
    }

    pub fn at(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn constant(value: Literal) -> Self {
        Expr::new(ExprKind::Constant { value })
    }

    pub fn int(value: i64) -> Self {
        Expr::constant(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::constant(Literal::Float(value))
    }

    pub fn name(id: impl Into<String>) -> Self {
        Expr::new(ExprKind::Name { id: id.into() })
    }

    pub fn binop(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn subscript(value: Expr, index: Expr) -> Self {
        Expr::new(ExprKind::Subscript {
            value: Box::new(value),
            index: Box::new(index),
        })
    }

    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::new(ExprKind::Call {
            func: func.into(),
            args,
        })
    }

    pub fn if_exp(test: Expr, body: Expr, orelse: Expr) -> Self {
        Expr::new(ExprKind::IfExp {
            test: Box::new(test),
            body: Box::new(body),
            orelse: Box::new(orelse),
        })
    }

    pub fn tuple(elts: Vec<Expr>) -> Self {
        Expr::new(ExprKind::Tuple { elts })
    }

    pub fn unsupported(construct: impl Into<String>) -> Self {
        Expr::new(ExprKind::Unsupported {
            construct: construct.into(),
        })
    }

    pub fn construct(&self) -> &str {
        match &self.kind {
            ExprKind::Constant { .. } => "Constant",
            ExprKind::Name { .. } => "Name",
            ExprKind::BinOp { .. } => "BinOp",
            ExprKind::Subscript { .. } => "Subscript",
            ExprKind::Call { .. } => "Call",
            ExprKind::IfExp { .. } => "IfExp",
            ExprKind::Tuple { .. } => "Tuple",
            ExprKind::Unsupported { construct } => construct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    None,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::Str(s) => write!(f, "{:?}", s),
            Literal::None => write!(f, "None"),
        }
    }
}

/// Every binary operator of the host language. Which ones are accepted is
/// decided during lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    MatMult,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mult => "*",
            BinOp::Div => "/",
            BinOp::FloorDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::MatMult => "@",
            BinOp::LShift => "<<",
            BinOp::RShift => ">>",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::BitAnd => "&",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
