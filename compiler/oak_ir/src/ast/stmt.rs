//! Statement and declaration nodes.

use super::expr::Expr;

/// Statement node: a kind plus the line of its first token.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    Function(FunctionDecl),
    Var {
        name: String,
        init: Expr,
    },
    Print(Expr),
    Expr(Expr),
    Return(Option<Expr>),
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        else_ifs: Vec<ElseIf>,
        else_body: Option<Vec<Stmt>>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    /// Classic `for (init; cond; step)`. A missing condition loops forever.
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Vec<Stmt>,
    },
    /// `for (var name : iterable)`.
    ForEach {
        var: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    Break,
    Continue,
}

/// One `else if (cond) { body }` arm.
#[derive(Clone, PartialEq, Debug)]
pub struct ElseIf {
    pub cond: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: u32,
}

/// `class Name { members }`, the root of a parsed program.
#[derive(Clone, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: String,
    pub members: Vec<Stmt>,
    pub line: u32,
}

impl ClassDecl {
    /// Member functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.members.iter().filter_map(|member| match &member.kind {
            StmtKind::Function(func) => Some(func),
            _ => None,
        })
    }

    /// First member function with the given name.
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions().find(|func| func.name == name)
    }
}
