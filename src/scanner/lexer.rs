use winnow::combinator::alt;
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, take_till, take_while};

use crate::error::CompileError;
use crate::scanner::token::{Span, Token, TokenKind, keyword_kind};

type Input<'a> = LocatingSlice<&'a str>;

fn whitespace(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// A string literal enclosed in matching single or double quotes. No escape
/// sequences; the closing quote is the first quote of the same style. The
/// lexeme keeps both quote characters — the interpreter strips them.
fn string_literal(input: &mut Input<'_>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let lexeme: &str = alt((
        ('\'', take_till(0.., '\''), '\'').take(),
        ('"', take_till(0.., '"'), '"').take(),
    ))
    .parse_next(input)?;
    let end = input.current_token_start();
    Ok(Token::new(
        TokenKind::String,
        lexeme,
        Span::new(start, end - start),
    ))
}

fn identifier_or_keyword(input: &mut Input<'_>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let first: char = any
        .verify(|c: &char| c.is_ascii_alphabetic() || *c == '_')
        .parse_next(input)?;
    let rest: &str =
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)?;
    let end = input.current_token_start();
    let mut lexeme = String::with_capacity(1 + rest.len());
    lexeme.push(first);
    lexeme.push_str(rest);
    let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Identifier);
    Ok(Token::new(kind, lexeme, Span::new(start, end - start)))
}

fn single_char_token(input: &mut Input<'_>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let c = any
        .verify(|c: &char| "():".contains(*c))
        .parse_next(input)?;
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        ':' => TokenKind::Colon,
        _ => unreachable!("verify guarantees valid char"),
    };
    Ok(Token::new(kind, c.to_string(), Span::new(start, 1)))
}

fn scan_token(input: &mut Input<'_>) -> ModalResult<Token> {
    alt((string_literal, identifier_or_keyword, single_char_token)).parse_next(input)
}

/// Scan all tokens from source, appending a zero-length `Eof` sentinel.
///
/// Scanning stops at the first character no recognizer accepts; the error
/// names the character and its byte offset, and no tokens are returned.
pub fn scan_all(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    loop {
        if whitespace(&mut input).is_err() {
            break;
        }
        if input.is_empty() {
            break;
        }
        match scan_token(&mut input) {
            Ok(token) => tokens.push(token),
            Err(_) => {
                let offset = input.current_token_start();
                let c = any::<_, ContextError>.parse_next(&mut input).ok();
                let ch = c.unwrap_or('?');
                return Err(CompileError::scan(
                    format!("unexpected character '{ch}'"),
                    offset,
                    ch.len_utf8(),
                ));
            }
        }
    }

    let eof_offset = source.len();
    tokens.push(Token::new(TokenKind::Eof, "", Span::new(eof_offset, 0)));
    Ok(tokens)
}
