use crate::ast::{
    BodyStmt, CallStmt, FunctionDef, PrintStmt, Program, ReturnStmt, Stmt, TypeName,
};
use crate::error::CompileError;
use crate::scanner::token::{Span, Token, TokenKind};

/// Recursive-descent parser over the scanner's token stream.
///
/// The grammar nests exactly one level deep (function bodies), so every
/// production is a straight-line sequence of expected tokens. The first
/// token that breaks a production aborts the parse; there is no recovery
/// and no partial program.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Program, CompileError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.statement()?);
        }
        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Stmt, CompileError> {
        match self.peek().kind {
            TokenKind::Func => self.function_definition(),
            TokenKind::Print => self.print_statement().map(Stmt::Print),
            TokenKind::Identifier => self.call_statement(),
            _ => Err(self.error_at_current(format!(
                "unexpected token {}",
                self.describe_current()
            ))),
        }
    }

    fn function_definition(&mut self) -> Result<Stmt, CompileError> {
        let start = self.current_span();
        self.advance(); // consume 'func'
        let name = self.expect_identifier("function name after 'func'")?;
        self.consume(TokenKind::LeftParen, "'(' after function name")?;
        // The parameter list is always empty, so ')' follows immediately.
        self.consume(TokenKind::RightParen, "')' after '('")?;
        let return_type = self.return_type()?;

        let mut body = Vec::new();
        while !self.check(TokenKind::End) && !self.is_at_end() {
            body.push(self.body_statement()?);
        }
        self.consume(TokenKind::End, "'end' after function body")?;

        let span = self.span_from(start);
        Ok(Stmt::Func(FunctionDef {
            name,
            return_type,
            body,
            span,
        }))
    }

    fn body_statement(&mut self) -> Result<BodyStmt, CompileError> {
        match self.peek().kind {
            TokenKind::Print => self.print_statement().map(BodyStmt::Print),
            TokenKind::Return => self.return_statement().map(BodyStmt::Return),
            _ => Err(self.error_at_current(format!(
                "unexpected token {} in function body",
                self.describe_current()
            ))),
        }
    }

    /// `print STRING`, shared by the top level and function bodies.
    fn print_statement(&mut self) -> Result<PrintStmt, CompileError> {
        let start = self.current_span();
        self.advance(); // consume 'print'
        let literal = self.expect_string("string literal after 'print'")?;
        let span = self.span_from(start);
        Ok(PrintStmt { literal, span })
    }

    fn return_statement(&mut self) -> Result<ReturnStmt, CompileError> {
        let start = self.current_span();
        self.advance(); // consume 'return'
        let literal = self.expect_string("string literal after 'return'")?;
        let span = self.span_from(start);
        Ok(ReturnStmt { literal, span })
    }

    fn call_statement(&mut self) -> Result<Stmt, CompileError> {
        let start = self.current_span();
        let name = self.expect_identifier("function name")?;
        self.consume(TokenKind::LeftParen, "'(' after function name")?;
        self.consume(TokenKind::RightParen, "')' after '('")?;
        let span = self.span_from(start);
        Ok(Stmt::Call(CallStmt { name, span }))
    }

    fn return_type(&mut self) -> Result<TypeName, CompileError> {
        self.consume(TokenKind::Type, "return type after '()'")?;
        // 'string' is the only type the scanner recognizes.
        Ok(TypeName::Str)
    }

    // --- Helper methods ---

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, CompileError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(format!(
                "expected {message}, found {}",
                self.describe_current()
            )))
        }
    }

    fn expect_identifier(&mut self, context: &str) -> Result<String, CompileError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.error_at_current(format!(
                "expected {context}, found {}",
                self.describe_current()
            )))
        }
    }

    fn expect_string(&mut self, context: &str) -> Result<String, CompileError> {
        if self.check(TokenKind::String) {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.error_at_current(format!(
                "expected {context}, found {}",
                self.describe_current()
            )))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    fn previous_span(&self) -> Span {
        self.tokens[self.current - 1].span
    }

    /// Span covering everything from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        let prev = self.previous_span();
        Span::new(start.offset, prev.offset + prev.len - start.offset)
    }

    fn error_at_current(&self, message: String) -> CompileError {
        let token = self.peek();
        // The EOF token sits one past the source; label the final byte
        // instead so the caret lands inside the snippet.
        let (offset, len) = if token.kind == TokenKind::Eof {
            (token.span.offset.saturating_sub(1), token.span.offset.min(1))
        } else {
            (token.span.offset, token.span.len.max(1))
        };
        CompileError::parse(message, offset, len)
    }

    fn describe_current(&self) -> String {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("'{}'", token.lexeme)
        }
    }
}
