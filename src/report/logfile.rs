use std::fs::{create_dir, write};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;

const FALLBACK_USERNAME: &str = "user";

/// Resolve the identity string embedded in log file names from the local
/// git configuration. Spaces are stripped so the name is filesystem-safe.
pub fn resolve_username() -> String {
    let output = Command::new("git").args(["config", "user.name"]).output();

    match output {
        Ok(output) if output.status.success() => {
            let name = String::from_utf8_lossy(&output.stdout).trim().replace(' ', "");
            if name.is_empty() {
                String::from(FALLBACK_USERNAME)
            } else {
                name
            }
        }
        _ => String::from(FALLBACK_USERNAME),
    }
}

/// Persist the rendered listing under `logs/`, stamped with the analyzed
/// file, the wall-clock time and the resolved identity. Returns the path
/// of the file written.
pub fn write_log(source_file: &Path, listing: &str) -> io::Result<PathBuf> {
    let logs_dir = PathBuf::from("logs");
    if !logs_dir.exists() {
        create_dir(&logs_dir)?;
    }

    let username = resolve_username();
    let now = Local::now();
    let log_path = logs_dir.join(format!(
        "lexical-{}-{}.txt",
        username,
        now.format("%d-%m-%Y-%Hh%M")
    ));

    let rule = "=".repeat(80);
    let mut contents = String::new();
    contents.push_str(&rule);
    contents.push('\n');
    contents.push_str("LEXICAL ANALYSIS - GO\n");
    contents.push_str(&rule);
    contents.push('\n');
    contents.push_str(&format!(
        "Analyzed file: {}\n",
        source_file.as_os_str().to_string_lossy()
    ));
    contents.push_str(&format!("Date: {}\n", now.format("%d/%m/%Y %H:%M:%S")));
    contents.push_str(&format!("User: {}\n", username));
    contents.push_str(&rule);
    contents.push_str("\n\n");
    contents.push_str(listing);
    contents.push('\n');
    contents.push_str(&rule);
    contents.push('\n');
    contents.push_str("END OF ANALYSIS\n");
    contents.push_str(&rule);
    contents.push('\n');

    write(&log_path, contents)?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::resolve_username;

    #[test]
    fn test_resolved_username_is_filesystem_safe() {
        let username = resolve_username();

        assert!(!username.is_empty());
        assert!(!username.contains(' '));
    }
}
