use crate::{
    errors::errors::{Diagnostic, Error, ErrorImpl},
    Position, MK_DIAGNOSTIC, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, OPERATORS, RESERVED_LOOKUP};

/// Everything one scan produces. `tokens` and `diagnostics` are in source
/// order. When `fatal` is set the scan stopped early and `tokens` holds only
/// the prefix recognised up to that point.
#[derive(Debug)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    pub fatal: Option<Error>,
}

pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    pos: usize,
    line: u32,
    line_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            tokens: vec![],
            diagnostics: vec![],
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Line/column of an absolute offset. Only valid for offsets on the
    /// current line, which is all the handlers ever need: every token and
    /// diagnostic is stamped at the start offset of its span.
    fn position_at(&self, offset: usize) -> Position {
        Position::new(self.line, (offset - self.line_start) as u32 + 1)
    }

    /// Consume a newline at the current offset. The newline belongs to the
    /// line it terminates; the next character is column 1 of the next line.
    fn consume_newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.line_start = self.pos;
    }

    fn slice_from(&self, start: usize) -> String {
        self.source[start..self.pos].iter().collect()
    }
}

fn symbol_handler(lexer: &mut Lexer) {
    let start = lexer.pos;

    while let Some(c) = lexer.peek_at(0) {
        if c.is_ascii_alphanumeric() || c == '_' {
            lexer.advance_n(1);
        } else {
            break;
        }
    }

    let text = lexer.slice_from(start);
    let position = lexer.position_at(start);

    if let Some(kind) = RESERVED_LOOKUP.get(text.as_str()) {
        lexer.push(MK_TOKEN!(*kind, text, position));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, text, position));
    }
}

fn number_handler(lexer: &mut Lexer) {
    let start = lexer.pos;

    while lexer.peek_at(0).is_some_and(|c| c.is_ascii_digit()) {
        lexer.advance_n(1);
    }

    // A dot only extends the literal when digits follow it; `123.` scans as
    // an integer and leaves the dot for the delimiter table.
    let mut kind = TokenKind::IntLiteral;
    if lexer.peek_at(0) == Some('.') && lexer.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
        kind = TokenKind::FloatLiteral;
        lexer.advance_n(1);
        while lexer.peek_at(0).is_some_and(|c| c.is_ascii_digit()) {
            lexer.advance_n(1);
        }
    }

    let text = lexer.slice_from(start);
    let position = lexer.position_at(start);
    lexer.push(MK_TOKEN!(kind, text, position));
}

fn line_comment_handler(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek_at(0) {
        if c == '\n' {
            break;
        }
        lexer.advance_n(1);
    }
}

fn block_comment_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let opening = lexer.position_at(lexer.pos);
    lexer.advance_n(2);

    while !lexer.at_eof() {
        if lexer.at() == '*' && lexer.peek_at(1) == Some('/') {
            lexer.advance_n(2);
            return Ok(());
        }
        if lexer.at() == '\n' {
            lexer.consume_newline();
        } else {
            lexer.advance_n(1);
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedComment, opening))
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos;
    let opening = lexer.position_at(start);
    lexer.advance_n(1);

    loop {
        match lexer.peek_at(0) {
            None | Some('\n') => {
                return Err(Error::new(ErrorImpl::UnterminatedString, opening));
            }
            Some('"') => {
                lexer.advance_n(1);
                break;
            }
            Some('\\') => {
                // An escape is a backslash plus any one character, kept raw
                // in the lexeme.
                if lexer.peek_at(1).is_none() {
                    return Err(Error::new(ErrorImpl::UnterminatedString, opening));
                }
                if lexer.peek_at(1) == Some('\n') {
                    lexer.advance_n(1);
                    lexer.consume_newline();
                } else {
                    lexer.advance_n(2);
                }
            }
            Some(_) => lexer.advance_n(1),
        }
    }

    let text = lexer.slice_from(start);
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, text, opening));
    Ok(())
}

fn rune_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos;
    let opening = lexer.position_at(start);
    lexer.advance_n(1);

    match lexer.peek_at(0) {
        None | Some('\n') => {
            return Err(Error::new(ErrorImpl::MalformedRune, opening));
        }
        Some('\\') => {
            if lexer.peek_at(1).is_none() || lexer.peek_at(1) == Some('\n') {
                return Err(Error::new(ErrorImpl::MalformedRune, opening));
            }
            lexer.advance_n(2);
        }
        Some(_) => lexer.advance_n(1),
    }

    if lexer.peek_at(0) != Some('\'') {
        return Err(Error::new(ErrorImpl::MalformedRune, opening));
    }
    lexer.advance_n(1);

    let text = lexer.slice_from(start);
    lexer.push(MK_TOKEN!(TokenKind::RuneLiteral, text, opening));
    Ok(())
}

fn operator_handler(lexer: &mut Lexer) -> bool {
    for (pattern, kind) in OPERATORS {
        let matches = pattern
            .chars()
            .enumerate()
            .all(|(i, c)| lexer.peek_at(i) == Some(c));

        if matches {
            let position = lexer.position_at(lexer.pos);
            lexer.push(MK_TOKEN!(*kind, String::from(*pattern), position));
            lexer.advance_n(pattern.len());
            return true;
        }
    }

    false
}

pub fn tokenize(source: &str) -> ScanResult {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let c = lex.at();

        if c == '\n' {
            lex.consume_newline();
            continue;
        }

        if c == ' ' || c == '\t' {
            lex.advance_n(1);
            continue;
        }

        if c == '/' && lex.peek_at(1) == Some('/') {
            line_comment_handler(&mut lex);
            continue;
        }

        if c == '/' && lex.peek_at(1) == Some('*') {
            if let Err(error) = block_comment_handler(&mut lex) {
                return finish(lex, Some(error));
            }
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            symbol_handler(&mut lex);
            continue;
        }

        if c.is_ascii_digit() {
            number_handler(&mut lex);
            continue;
        }

        if c == '"' {
            if let Err(error) = string_handler(&mut lex) {
                return finish(lex, Some(error));
            }
            continue;
        }

        if c == '\'' {
            if let Err(error) = rune_handler(&mut lex) {
                return finish(lex, Some(error));
            }
            continue;
        }

        if operator_handler(&mut lex) {
            continue;
        }

        // No rule matched: record the character and keep scanning.
        let position = lex.position_at(lex.pos);
        lex.diagnostics
            .push(MK_DIAGNOSTIC!(format!("Illegal character '{}'", c), position));
        lex.advance_n(1);
    }

    finish(lex, None)
}

fn finish(lexer: Lexer, fatal: Option<Error>) -> ScanResult {
    ScanResult {
        tokens: lexer.tokens,
        diagnostics: lexer.diagnostics,
        fatal,
    }
}
