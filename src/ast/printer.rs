use crate::ast::*;

pub fn to_sexp(program: &Program) -> String {
    let mut buf = String::new();
    for stmt in &program.statements {
        sexp_stmt(&mut buf, stmt);
        buf.push('\n');
    }
    buf
}

pub fn to_json(program: &Program) -> String {
    serde_json::to_string_pretty(program).expect("AST should be serializable")
}

fn sexp_stmt(buf: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Print(p) => sexp_print(buf, p),
        Stmt::Call(c) => {
            buf.push_str("(call ");
            buf.push_str(&c.name);
            buf.push(')');
        }
        Stmt::Func(f) => {
            buf.push_str("(func ");
            buf.push_str(&f.name);
            buf.push(' ');
            buf.push_str(&f.return_type.to_string());
            for body_stmt in &f.body {
                buf.push(' ');
                sexp_body_stmt(buf, body_stmt);
            }
            buf.push(')');
        }
    }
}

fn sexp_body_stmt(buf: &mut String, stmt: &BodyStmt) {
    match stmt {
        BodyStmt::Print(p) => sexp_print(buf, p),
        BodyStmt::Return(r) => {
            buf.push_str("(return ");
            buf.push_str(&r.literal);
            buf.push(')');
        }
    }
}

fn sexp_print(buf: &mut String, p: &PrintStmt) {
    buf.push_str("(print ");
    buf.push_str(&p.literal);
    buf.push(')');
}
