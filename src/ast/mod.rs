pub mod printer;

use serde::Serialize;

use crate::scanner::token::Span;

/// Top-level program: a list of statements in source order.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A top-level statement. Function bodies use [`BodyStmt`] instead; keeping
/// the two sets apart makes "definitions never nest" and "bodies hold only
/// print/return" structural invariants rather than parser conventions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Print(PrintStmt),
    Call(CallStmt),
    Func(FunctionDef),
}

/// A statement inside a function body.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum BodyStmt {
    Print(PrintStmt),
    Return(ReturnStmt),
}

#[derive(Debug, Clone, Serialize)]
pub struct PrintStmt {
    /// The string token text, enclosing quotes included.
    pub literal: String,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallStmt {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub return_type: TypeName,
    pub body: Vec<BodyStmt>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnStmt {
    /// The string token text, enclosing quotes included.
    pub literal: String,
    pub span: Span,
}

/// A return type annotation. `string` is the only type the language defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum TypeName {
    #[serde(rename = "string")]
    #[strum(serialize = "string")]
    Str,
}
