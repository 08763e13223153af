//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DIAGNOSTIC!` - Creates a Diagnostic instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$position` - The line/column where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates a Diagnostic instance.
///
/// # Arguments
///
/// * `$message` - The human-readable description
/// * `$position` - The line/column of the offending character
///
/// # Example
///
/// ```ignore
/// let diagnostic = MK_DIAGNOSTIC!(format!("illegal character '@'"), position);
/// ```
#[macro_export]
macro_rules! MK_DIAGNOSTIC {
    ($message:expr, $position:expr) => {
        Diagnostic {
            message: $message,
            position: $position,
        }
    };
}
