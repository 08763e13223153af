use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal scan error. The token stream produced before this error is a
/// partial prefix only.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MalformedRune => "MalformedRune",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, did you forget a `*/`?",
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you forget a closing `\"`?",
            )),
            ErrorImpl::MalformedRune => ErrorTip::Suggestion(String::from(
                "Rune literals hold exactly one character, did you forget a closing `'`?",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("malformed rune literal")]
    MalformedRune,
}

/// A recoverable lexical error: an illegal character that was skipped.
/// Collected in source order over one scan, never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub position: Position,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.message, self.position.line, self.position.column
        )
    }
}
