//! Rule Trie - a fast exact-membership rule matching engine for Rust
//!
//! This library stores a set of textual rules in a prefix tree over the 26
//! lowercase ASCII letters and answers exact-membership queries against it:
//! - Noise-tolerant matching: non-letters stripped and case folded by the same
//!   normalization before every insert and search
//! - O(length) insert and search over a dense 26-slot child table per node
//! - Explicit lifecycle: init, insert, search, teardown (iterative, so rule
//!   length never becomes stack depth)
//! - Reader-writer wrapper for multi-threaded callers
//! - Rule lists loadable from plain-text and JSON files
//!
//! # Example
//!
//! ```rust
//! use rule_trie_r::RuleTrie;
//!
//! let mut trie = RuleTrie::new();
//! trie.insert("Stop-Loss").unwrap();
//!
//! // "stoploss" however it is spelled
//! assert!(trie.search("stoploss"));
//! assert!(trie.search("STOP loss!"));
//!
//! // exact membership only: prefixes don't match
//! assert!(!trie.search("stop"));
//!
//! trie.teardown();
//! assert!(!trie.search("stoploss"));
//! ```
//!
//! # Rule Files
//!
//! [`RuleFileLoader`] reads rule texts from a directory, detecting the format
//! of each file by extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | top-level array or `{"rules": [...]}`; entries are strings or objects with a `text` field |
//! | `.txt`, `.rules`, `.list` | one rule per line; `#` comments; `file:` include directive |
//!
//! Files with other extensions are skipped. Loaded texts are raw; the trie
//! normalizes them on insert.
//!
//! # Lifecycle
//!
//! After [`RuleTrie::teardown`] the trie holds no nodes: `search` returns
//! `false` for every input and `insert` fails with [`TrieError::TornDown`]
//! until [`RuleTrie::init`] re-establishes the empty root. Re-init is
//! deliberately explicit; a torn-down trie never revives itself.

pub mod error;
pub mod loader;
pub mod parser;
pub mod shared;
pub mod trie;

// Re-export commonly used items
pub use error::{Result, TrieError};
pub use loader::{load_rules_from_file, RuleFileFormat, RuleFileLoader};
pub use parser::{parse_rules, parse_rules_from_file};
pub use shared::SharedRuleTrie;
pub use trie::{normalize, RuleTrie};
