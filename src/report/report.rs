use std::path::Path;

use crate::errors::errors::Diagnostic;
use crate::lexer::tokens::Token;

const RULE_WIDTH: usize = 80;

/// Render the full analysis listing: banner, one row per token, summary
/// counts and the error section. The same text goes to the console and to
/// the log file.
pub fn render_listing(file: &Path, tokens: &[Token], diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "LEXICAL ANALYSIS: {}\n",
        file.as_os_str().to_string_lossy()
    ));
    out.push_str(&rule);
    out.push_str("\n\n");

    for token in tokens {
        out.push_str(&format!(
            "Token: {:<20} | Lexeme: {:<30} | Line: {:>4} | Column: {:>4}\n",
            token.kind.to_string(),
            token.lexeme,
            token.position.line,
            token.position.column
        ));
    }

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str("SUMMARY\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Tokens recognised: {}\n", tokens.len()));
    out.push_str(&format!("Errors found: {}\n", diagnostics.len()));

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("LEXICAL ERRORS ({})\n", diagnostics.len()));
    out.push_str(&thin_rule);
    out.push('\n');

    if diagnostics.is_empty() {
        out.push_str("No lexical errors found.\n");
    } else {
        for diagnostic in diagnostics {
            out.push_str(&format!("{}\n", diagnostic));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::render_listing;
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_listing_contains_token_rows() {
        let result = tokenize("x := 42");
        let listing = render_listing(Path::new("sample.go"), &result.tokens, &result.diagnostics);

        assert!(listing.contains("LEXICAL ANALYSIS: sample.go"));
        assert!(listing.contains("Identifier"));
        assert!(listing.contains("DeclareAssign"));
        assert!(listing.contains("IntLiteral"));
        assert!(listing.contains("Tokens recognised: 3"));
        assert!(listing.contains("No lexical errors found."));
    }

    #[test]
    fn test_listing_reports_diagnostics() {
        let result = tokenize("a @ b");
        let listing = render_listing(Path::new("sample.go"), &result.tokens, &result.diagnostics);

        assert!(listing.contains("Errors found: 1"));
        assert!(listing.contains("LEXICAL ERRORS (1)"));
        assert!(listing.contains("Illegal character '@' at line 1, column 3"));
    }
}
