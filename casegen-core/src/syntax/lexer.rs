//! Swift token scanner built on logos.
//!
//! Only the tokens that matter for declaration shape are distinguished.
//! Comments and string literals are consumed whole (nested block comments,
//! multi-line and raw strings, `\( )` interpolation) so braces inside them
//! never reach the parser.

use logos::{Lexer, Logos};

use super::SyntaxError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r##"#*""##, string_literal)]
    StringLiteral,

    // Declaration keywords
    #[token("import")]
    Import,

    #[token("enum")]
    Enum,

    #[token("case")]
    Case,

    #[token("class")]
    Class,

    #[token("struct")]
    Struct,

    #[token("extension")]
    Extension,

    #[token("protocol")]
    Protocol,

    #[token("func")]
    Func,

    #[token("init")]
    Init,

    #[token("deinit")]
    Deinit,

    #[token("subscript")]
    Subscript,

    #[token("var")]
    Var,

    #[token("let")]
    Let,

    #[token("typealias")]
    Typealias,

    #[token("associatedtype")]
    Associatedtype,

    #[token("operator")]
    Operator,

    #[token("precedencegroup")]
    Precedencegroup,

    #[token("where")]
    Where,

    #[token("return")]
    Return,

    #[regex(r"[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    #[regex(r"`[A-Za-z_][A-Za-z0-9_]*`")]
    #[regex(r"\$[A-Za-z0-9_]+")]
    Identifier,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?")]
    Number,

    /// `#if`, `#endif`, `#selector`, ...
    #[regex(r"#[A-Za-z_][A-Za-z0-9_]*")]
    PoundKeyword,

    // Punctuation
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    #[token("=")]
    Eq,

    #[token("->")]
    Arrow,

    #[token("@")]
    At,

    #[token("?")]
    Question,

    #[token("!")]
    Bang,

    #[token("&")]
    Amp,

    #[token("\\")]
    Backslash,

    #[token("#")]
    Pound,

    #[regex(r"[-+*/%|^~]")]
    Punct,
}

/// A token together with where it sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub start: usize,
    pub end: usize,
    /// 1-indexed line of `start`
    pub line: usize,
    /// 1-indexed column of `start`, counted in characters
    pub column: usize,
}

impl Lexeme {
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// Maps byte offsets to line/column pairs.
struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    fn locate(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let column = self.source[self.line_starts[line]..offset].chars().count() + 1;
        (line + 1, column)
    }
}

/// Splits Swift source into lexemes, dropping comments.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let index = LineIndex::new(source);
    let mut lexemes = Vec::with_capacity(source.len() / 4);

    for (result, span) in Token::lexer(source).spanned() {
        let (line, column) = index.locate(span.start);
        match result {
            Ok(Token::BlockComment) => {}
            Ok(token) => lexemes.push(Lexeme {
                token,
                start: span.start,
                end: span.end,
                line,
                column,
            }),
            Err(()) => {
                let slice = &source[span.clone()];
                let message = if slice.starts_with("/*") {
                    "unterminated block comment".to_string()
                } else if slice.starts_with('"') || slice.starts_with('#') {
                    "unterminated string literal".to_string()
                } else {
                    format!("unexpected character '{}'", slice.chars().next().unwrap_or('?'))
                };
                return Err(SyntaxError::new(message, line, column));
            }
        }
    }

    Ok(lexemes)
}

fn block_comment(lex: &mut Lexer<Token>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
        } else {
            i += 1;
        }
    }
    lex.bump(bytes.len());
    false
}

fn string_literal(lex: &mut Lexer<Token>) -> bool {
    let hashes = lex.slice().len() - 1;
    let rest = lex.remainder().as_bytes();
    match scan_string_body(rest, hashes) {
        Some(consumed) => {
            lex.bump(consumed);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

/// Scans past a string body whose opening quote was already consumed.
/// Returns the number of bytes up to and including the closing delimiter.
fn scan_string_body(bytes: &[u8], hashes: usize) -> Option<usize> {
    let multiline = bytes.starts_with(b"\"\"");
    let (mut i, quotes) = if multiline { (2, 3) } else { (0, 1) };

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if followed_by_hashes(bytes, i + 1, hashes) => {
                let after = i + 1 + hashes;
                if bytes.get(after) == Some(&b'(') {
                    i = skip_interpolation(bytes, after + 1)?;
                } else {
                    i = after + 1;
                }
            }
            b'"' if closes_string(bytes, i, quotes, hashes) => return Some(i + quotes + hashes),
            b'\n' if !multiline => return None,
            _ => i += 1,
        }
    }
    None
}

fn followed_by_hashes(bytes: &[u8], start: usize, count: usize) -> bool {
    (0..count).all(|k| bytes.get(start + k) == Some(&b'#'))
}

fn closes_string(bytes: &[u8], at: usize, quotes: usize, hashes: usize) -> bool {
    (0..quotes).all(|k| bytes.get(at + k) == Some(&b'"'))
        && followed_by_hashes(bytes, at + quotes, hashes)
}

/// Skips an interpolation segment starting just after its `(`.
fn skip_interpolation(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            b'"' => {
                i += 1 + scan_string_body(&bytes[i + 1..], 0)?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}
