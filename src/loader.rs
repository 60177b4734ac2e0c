//! Rule file loading with format auto-detection.
//!
//! Rule texts live in a rules directory as either JSON documents or plain-text
//! lists. The loader detects the format from the file extension, parses every
//! recognized file, and hands back the raw rule texts for trie insertion.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Result, TrieError};
use crate::parser;

/// Rule file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileFormat {
    /// JSON document: a top-level array or an object with a `rules` key.
    Json,
    /// Plain-text list, one rule per line (see [`crate::parser::parse_rules`]).
    Text,
}

impl RuleFileFormat {
    /// Detect the format from a file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("txt") | Some("rules") | Some("list") => Some(Self::Text),
            _ => None,
        }
    }
}

/// One entry in a JSON rule file: either a bare string or an object carrying
/// the rule in a `text` field. Other fields on the object form (ids,
/// severities, whatever the producing system tracks) are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RuleEntry {
    Text(String),
    Detailed { text: String },
}

impl RuleEntry {
    fn into_text(self) -> String {
        match self {
            RuleEntry::Text(text) | RuleEntry::Detailed { text } => text,
        }
    }
}

/// Accepted top-level shapes of a JSON rule file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RuleFile {
    Wrapped { rules: Vec<RuleEntry> },
    Flat(Vec<RuleEntry>),
}

impl RuleFile {
    fn into_texts(self) -> Vec<String> {
        let entries = match self {
            RuleFile::Wrapped { rules } => rules,
            RuleFile::Flat(rules) => rules,
        };
        entries.into_iter().map(RuleEntry::into_text).collect()
    }
}

/// Loads rule texts from a rules directory.
///
/// # Example
///
/// ```rust,no_run
/// use rule_trie_r::{RuleFileLoader, RuleTrie};
///
/// let loader = RuleFileLoader::new().with_rules_path("rules");
/// let trie = RuleTrie::from_rules(loader.load_rules()?);
/// if trie.search("stop loss") {
///     println!("rule present");
/// }
/// # Ok::<(), rule_trie_r::TrieError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleFileLoader {
    rules_path: Option<PathBuf>,
}

impl RuleFileLoader {
    /// Create a new loader with no rules path configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rules directory path.
    pub fn with_rules_path(mut self, path: impl AsRef<Path>) -> Self {
        self.rules_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load every recognized rule file from the configured directory.
    ///
    /// The directory is scanned non-recursively in path order, so load order
    /// is deterministic. Files whose extension maps to no known format are
    /// skipped. Returns raw rule texts ready for trie insertion.
    pub fn load_rules(&self) -> Result<Vec<String>> {
        let dir = self
            .rules_path
            .as_deref()
            .ok_or(TrieError::RulesPathNotConfigured)?;
        if !dir.is_dir() {
            return Err(TrieError::RulesPathNotFound(dir.display().to_string()));
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut rules = Vec::new();
        for path in &paths {
            match RuleFileFormat::detect(path) {
                Some(format) => {
                    let file_rules = load_file(path, format)?;
                    debug!("loaded {} rules from {}", file_rules.len(), path.display());
                    rules.extend(file_rules);
                }
                None => {
                    debug!("skipping {}: unrecognized rule file extension", path.display());
                }
            }
        }

        Ok(rules)
    }
}

/// Load a single rule file, detecting the format from its extension.
///
/// A file with an unrecognized extension is parsed as a plain-text list.
pub fn load_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let format = RuleFileFormat::detect(path).unwrap_or(RuleFileFormat::Text);
    load_file(path, format)
}

fn load_file(path: &Path, format: RuleFileFormat) -> Result<Vec<String>> {
    match format {
        RuleFileFormat::Json => {
            let text = fs::read_to_string(path)?;
            let file: RuleFile = serde_json::from_str(&text)?;
            Ok(file.into_texts())
        }
        RuleFileFormat::Text => parser::parse_rules_from_file(path),
    }
}
