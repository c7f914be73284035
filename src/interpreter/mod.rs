pub mod functions;

use std::io::Write;

use crate::ast::{BodyStmt, CallStmt, FunctionDef, Program, Stmt};
use crate::error::RuntimeError;
use crate::interpreter::functions::FunctionTable;

/// Outcome of one body statement, telling the body loop whether to keep
/// walking. `return` maps to `Stop`; nothing flows back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Interpreter {
    functions: FunctionTable,
    output: Vec<String>,
    /// Writer for print output (allows testing without stdout)
    writer: Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            functions: FunctionTable::new(),
            output: Vec::new(),
            writer: Box::new(std::io::stdout()),
        }
    }

    /// Create an interpreter that captures output (for testing).
    #[cfg(test)]
    fn new_capturing() -> Self {
        Self {
            functions: FunctionTable::new(),
            output: Vec::new(),
            writer: Box::new(Vec::<u8>::new()),
        }
    }

    /// Execute a program top to bottom. Defined functions persist on this
    /// interpreter, so follow-up calls (the REPL's line-at-a-time mode)
    /// see everything defined earlier.
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Lines emitted so far, in execution order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    fn execute(&mut self, statement: &Stmt) -> Result<(), RuntimeError> {
        match statement {
            Stmt::Print(p) => {
                self.emit(unquote(&p.literal).to_string());
                Ok(())
            }
            Stmt::Call(c) => self.execute_call(c),
            Stmt::Func(f) => {
                self.functions.define(f.clone());
                Ok(())
            }
        }
    }

    fn execute_call(&mut self, call: &CallStmt) -> Result<(), RuntimeError> {
        let function = self
            .functions
            .get(&call.name)
            .ok_or_else(|| RuntimeError::undefined_function(&call.name, call.span))?;
        self.execute_body(&function);
        Ok(())
    }

    fn execute_body(&mut self, function: &FunctionDef) {
        for statement in &function.body {
            match self.execute_body_stmt(function, statement) {
                Flow::Continue => {}
                Flow::Stop => break,
            }
        }
    }

    fn execute_body_stmt(&mut self, function: &FunctionDef, statement: &BodyStmt) -> Flow {
        match statement {
            BodyStmt::Print(p) => {
                self.emit(unquote(&p.literal).to_string());
                Flow::Continue
            }
            BodyStmt::Return(r) => {
                let value = unquote(&r.literal);
                self.emit(format!("Executing {}: returns {value}", function.name));
                Flow::Stop
            }
        }
    }

    fn emit(&mut self, line: String) {
        writeln!(self.writer, "{line}").expect("write should succeed");
        self.output.push(line);
    }
}

/// Strip the enclosing quote characters from a string literal's lexeme.
/// The scanner guarantees the first and last byte are the quotes.
fn unquote(literal: &str) -> &str {
    &literal[1..literal.len() - 1]
}
