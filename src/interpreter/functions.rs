use std::collections::HashMap;

use crate::ast::FunctionDef;

/// Registry of defined functions, keyed by name.
///
/// The interpreter is the sole owner; lookups hand out clones so callers
/// never hold a borrow across execution. `define` silently overwrites, so
/// the latest definition wins for every later call.
#[derive(Debug)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionDef>,
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionTable {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn define(&mut self, function: FunctionDef) {
        self.functions.insert(function.name.clone(), function);
    }

    pub fn get(&self, name: &str) -> Option<FunctionDef> {
        self.functions.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BodyStmt, ReturnStmt, TypeName};
    use crate::scanner::token::Span;

    fn function(name: &str, returns: &str) -> FunctionDef {
        FunctionDef {
            name: name.to_string(),
            return_type: TypeName::Str,
            body: vec![BodyStmt::Return(ReturnStmt {
                literal: format!("'{returns}'"),
                span: Span::new(0, 0),
            })],
            span: Span::new(0, 0),
        }
    }

    #[test]
    fn define_and_get() {
        let mut table = FunctionTable::new();
        table.define(function("greet", "hi"));
        assert!(table.get("greet").is_some());
    }

    #[test]
    fn get_undefined_returns_none() {
        let table = FunctionTable::new();
        assert!(table.get("greet").is_none());
    }

    #[test]
    fn redefinition_overwrites_silently() {
        let mut table = FunctionTable::new();
        table.define(function("greet", "first"));
        table.define(function("greet", "second"));
        let def = table.get("greet").expect("greet is defined");
        let BodyStmt::Return(ret) = &def.body[0] else {
            panic!("expected a return statement");
        };
        assert_eq!(ret.literal, "'second'");
    }
}
