//! Lexical analysis for Go source text.
//!
//! This module contains the scanner that converts raw source code into a
//! stream of classified tokens. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Maximal-munch matching of multi-character symbols
//! - Line/column position tracking across comments and literals
//! - Recovery from illegal characters without aborting the scan

pub mod lexer;
pub mod tokens;
