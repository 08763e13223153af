//! Unit tests for error handling.
//!
//! This module contains tests for fatal scan errors and diagnostics.

use crate::errors::errors::{Diagnostic, Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(3, 10));

    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(7, 42));

    assert_eq!(error.get_position().line, 7);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 1));

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_malformed_rune_error() {
    let error = Error::new(ErrorImpl::MalformedRune, Position::new(1, 5));

    assert_eq!(error.get_error_name(), "MalformedRune");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(4, 9));

    assert_eq!(
        error.to_string(),
        "unterminated block comment at line 4, column 9"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::MalformedRune, Position::new(1, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        message: "Illegal character '@'".to_string(),
        position: Position::new(1, 3),
    };

    assert_eq!(
        diagnostic.to_string(),
        "Illegal character '@' at line 1, column 3"
    );
}
