use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TokenKind {
    // Single-character tokens
    #[strum(serialize = "(")]
    LeftParen,
    #[strum(serialize = ")")]
    RightParen,
    #[strum(serialize = ":")]
    Colon,

    // Literals
    #[strum(serialize = "IDENTIFIER")]
    Identifier,
    #[strum(serialize = "STRING")]
    String,

    // Keywords
    #[strum(serialize = "func")]
    Func,
    #[strum(serialize = "end")]
    End,
    #[strum(serialize = "return")]
    Return,
    #[strum(serialize = "string")]
    Type,
    #[strum(serialize = "print")]
    Print,

    #[strum(serialize = "EOF")]
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @{}", self.kind, self.lexeme, self.span.offset)
    }
}

/// Classify an identifier-shaped lexeme as a keyword, if it is one. Running
/// this after the identifier recognizer gives keywords priority over the
/// identifier pattern without depending on recognizer list order.
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    match ident {
        "func" => Some(TokenKind::Func),
        "end" => Some(TokenKind::End),
        "return" => Some(TokenKind::Return),
        "string" => Some(TokenKind::Type),
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}
