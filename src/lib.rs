#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

/// A 1-based line/column location in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

pub fn get_line_text(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line as usize - 1)
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: message
        -> main.go
           |
        20 | s := "abc
           | -----^
    */

    let position = error.get_position();
    let line_text = get_line_text(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_text() {
        let source = "package main\n\nfunc main() {\n\tx := 1\n}\n";

        assert_eq!(super::get_line_text(source, 1), Some("package main"));
        assert_eq!(super::get_line_text(source, 2), Some(""));
        assert_eq!(super::get_line_text(source, 4), Some("\tx := 1"));
        assert_eq!(super::get_line_text(source, 9), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    x := 1");
        assert_eq!(text, "x := 1");
        assert_eq!(removed, 4);
    }
}
