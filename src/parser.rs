use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{Result, TrieError};
use crate::trie::normalize;

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse a plain-text rule list.
///
/// One rule per line; `#` starts a comment that runs to the end of the line;
/// blank lines are skipped. Supports a `file: /path/to/more.rules` directive
/// to include rules from an external file.
///
/// Rule lines are returned raw: normalization is the trie's responsibility,
/// applied inside insert and search. Any text is a valid rule, so the only
/// failure modes are I/O on included files and the include depth cap.
pub fn parse_rules(text: &str) -> Result<Vec<String>> {
    parse_rules_inner(text, 0)
}

fn parse_rules_inner(text: &str, depth: usize) -> Result<Vec<String>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(TrieError::IncludeDepthExceeded {
            max: MAX_INCLUDE_DEPTH,
        });
    }

    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = if let Some(comment_pos) = line.find('#') {
            &line[..comment_pos]
        } else {
            line
        };
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        // Handle file include directive
        if let Some(path) = line.strip_prefix("file:") {
            let path = path.trim();
            let file_rules = parse_rules_from_file_inner(path, depth + 1)?;
            rules.extend(file_rules);
            continue;
        }

        if normalize(line).is_empty() {
            warn!("rule at line {line_num} contains no letters; it can only match empty input");
        }
        rules.push(line.to_string());
    }

    Ok(rules)
}

/// Parse a rule list from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    parse_rules_from_file_inner(path, 0)
}

fn parse_rules_from_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    parse_rules_inner(&text, depth)
}
