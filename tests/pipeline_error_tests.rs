use fable::error::{CompileError, RuntimeError};
use fable::interpreter::Interpreter;
use fable::parser::Parser;
use fable::scanner;

fn scan_error(source: &str) -> CompileError {
    scanner::scan(source).unwrap_err()
}

fn parse_error(source: &str) -> CompileError {
    let tokens = scanner::scan(source).expect("scan should succeed");
    Parser::new(tokens).parse().unwrap_err()
}

fn runtime_error(source: &str) -> (RuntimeError, Vec<String>) {
    let tokens = scanner::scan(source).expect("scan should succeed");
    let program = Parser::new(tokens).parse().expect("parse should succeed");
    let mut interp = Interpreter::new();
    let err = interp.interpret(&program).unwrap_err();
    (err, interp.output().to_vec())
}

#[test]
fn unrecognized_character_is_a_scan_error() {
    let err = scan_error("print 'ok'\n@");
    assert!(
        err.to_string().contains("unexpected character '@'"),
        "error should name the character: {err}"
    );
}

#[test]
fn scan_error_reports_the_offending_position() {
    let CompileError::Scan { span, .. } = scan_error("print @") else {
        panic!("expected a scan error");
    };
    assert_eq!(span.offset(), 6);
    assert_eq!(span.len(), 1);
}

#[test]
fn scan_error_precedes_parsing() {
    // The '@' sits after a statement that would otherwise parse; the scan
    // failure means that statement is never reached.
    let err = scan_error("print 'hello'\n@\nprint 'world'");
    assert!(matches!(err, CompileError::Scan { .. }));
}

#[test]
fn unterminated_function_is_a_parse_error() {
    let err = parse_error("func f() string print 'x'");
    let message = err.to_string();
    assert!(
        message.contains("expected 'end' after function body"),
        "error should name the missing 'end': {message}"
    );
}

#[test]
fn parse_error_happens_before_any_output() {
    // Interpretation never starts, so the leading print emits nothing.
    let result = {
        let tokens = scanner::scan("print 'never shown'\nfunc f() string").expect("scan");
        Parser::new(tokens).parse()
    };
    assert!(result.is_err());
}

#[test]
fn top_level_return_is_rejected() {
    let err = parse_error("return 'loose'");
    assert!(err.to_string().contains("unexpected token 'return'"));
}

#[test]
fn call_to_undefined_function_fails_with_no_output() {
    let (err, output) = runtime_error("foo()");
    assert!(
        err.to_string().contains("undefined function 'foo'"),
        "error should name the function: {err}"
    );
    assert!(output.is_empty(), "the failing call must not emit output");
}

#[test]
fn output_before_the_failing_call_is_kept() {
    let (err, output) = runtime_error("print 'kept'\nmissing()\nprint 'never'");
    assert!(err.to_string().contains("undefined function 'missing'"));
    assert_eq!(output, vec!["kept"]);
}

#[test]
fn runtime_error_carries_the_call_line() {
    let source = "print 'a'\ngreet()";
    let (err, _) = runtime_error(source);
    assert_eq!(
        err.display_with_line(source),
        "line 2: undefined function 'greet'"
    );
}

#[test]
fn definition_does_not_rescue_an_earlier_call() {
    // Calls resolve against the table as it stands when they execute.
    let (err, output) = runtime_error("late()\nfunc late() string print 'x' end");
    assert!(err.to_string().contains("undefined function 'late'"));
    assert!(output.is_empty());
}
