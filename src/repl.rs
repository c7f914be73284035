use std::io::{self, BufRead, Write};

use crate::error::CompileError;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::scanner;
use crate::scanner::token::TokenKind;

/// Run the interactive REPL. Defined functions persist across lines.
pub fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut interpreter = Interpreter::new();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "> " } else { "| " };
        print!("{prompt}");
        stdout.flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        buffer.push_str(&line);
        if buffer.trim().is_empty() {
            buffer.clear();
            continue;
        }
        if needs_continuation(&buffer) {
            continue;
        }

        let source = std::mem::take(&mut buffer);

        let tokens = match scanner::scan(&source) {
            Ok(t) => t,
            Err(e) => {
                report_compile_error(e, &source);
                continue;
            }
        };

        let program = match Parser::new(tokens).parse() {
            Ok(p) => p,
            Err(e) => {
                report_compile_error(e, &source);
                continue;
            }
        };

        if let Err(e) = interpreter.interpret(&program) {
            eprintln!("{}", e.display_with_line(&source));
        }
    }
}

fn report_compile_error(error: CompileError, source: &str) {
    let report = miette::Report::new(error.with_source_code("repl", source));
    eprintln!("{report:?}");
}

/// A buffer that opens more function definitions than it closes is held
/// back until the matching `end` arrives.
fn needs_continuation(source: &str) -> bool {
    let Ok(tokens) = scanner::scan(source) else {
        // Let the scan error surface on execution.
        return false;
    };
    let opened = tokens.iter().filter(|t| t.kind == TokenKind::Func).count();
    let closed = tokens.iter().filter(|t| t.kind == TokenKind::End).count();
    opened > closed
}
