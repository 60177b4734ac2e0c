//! Exact-membership rule trie over the 26-letter lowercase alphabet.

use crate::error::{Result, TrieError};

/// Child slots per node, one per lowercase ASCII letter.
const ALPHABET_SIZE: usize = 26;

/// One position in the trie.
///
/// `children` is a dense fixed-size table indexed by letter (0 = 'a').
/// The alphabet is closed and small, so a flat array beats any hashed map:
/// child lookup is a single index with no hashing.
#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    /// True iff some inserted rule ends exactly at this node.
    terminal: bool,
}

/// Normalize raw input into the trie's canonical alphabet.
///
/// Strips every character that is not an ASCII letter and lower-cases the
/// remainder, preserving order. `"Stop-Loss"`, `"STOPLOSS"` and `"stop loss"`
/// all normalize to `"stoploss"`; an input with no letters normalizes to the
/// empty string. The same transform runs before both insert and search, so the
/// two operations always agree on which inputs are equivalent.
///
/// # Example
///
/// ```rust
/// use rule_trie_r::normalize;
///
/// assert_eq!(normalize("Stop-Loss!"), "stoploss");
/// assert_eq!(normalize("h3ll0"), "hll"); // digits are dropped, not mapped
/// assert_eq!(normalize("123!!!"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .bytes()
        .filter(|b| b.is_ascii_alphabetic())
        .map(|b| b.to_ascii_lowercase() as char)
        .collect()
}

/// Byte-level equivalent of [`normalize`]: yields the child index of every
/// letter normalization would keep, without allocating the intermediate
/// string. Non-ASCII bytes never test as alphabetic, so multi-byte characters
/// are skipped whole.
fn letter_indices(rule: &str) -> impl Iterator<Item = usize> + '_ {
    rule.bytes()
        .filter(|b| b.is_ascii_alphabetic())
        .map(|b| (b.to_ascii_lowercase() - b'a') as usize)
}

/// Exact-membership set of rule strings, stored as a prefix tree.
///
/// Inputs are normalized (see [`normalize`]) before every insert and search,
/// so membership is insensitive to case and to non-letter noise. Only exact
/// matches count: a stored prefix of a longer rule is not a member unless it
/// was inserted itself.
///
/// # Lifecycle
///
/// A trie is ready on construction. [`teardown`](RuleTrie::teardown) releases
/// every node; afterwards `search` reports `false` for everything and `insert`
/// fails with [`TrieError::TornDown`] until [`init`](RuleTrie::init)
/// re-establishes the empty root. Dropping the trie tears it down implicitly.
#[derive(Debug)]
pub struct RuleTrie {
    /// `None` once torn down; `init` restores an empty root.
    root: Option<Box<Node>>,
}

impl RuleTrie {
    /// Create an initialized, empty trie.
    pub fn new() -> Self {
        Self {
            root: Some(Box::default()),
        }
    }

    /// Build a trie containing every rule in `rules`.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for rule in rules {
            trie.insert(rule.as_ref())
                .expect("freshly constructed trie cannot be torn down");
        }
        trie
    }

    /// Re-establish an empty root on a torn-down trie.
    ///
    /// Idempotent: on a live trie this is a no-op and inserted rules are kept.
    pub fn init(&mut self) {
        if self.root.is_none() {
            self.root = Some(Box::default());
        }
    }

    /// True from construction until [`teardown`](RuleTrie::teardown);
    /// [`init`](RuleTrie::init) makes it true again.
    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// Insert a rule into the set.
    ///
    /// The input is normalized first; an input with no letters marks the
    /// empty string as a member. Inserting the same effective rule twice
    /// leaves the trie unchanged. No input is ever rejected; the only failure
    /// is [`TrieError::TornDown`] on a trie awaiting re-init.
    pub fn insert(&mut self, rule: &str) -> Result<()> {
        let mut node = self.root.as_mut().ok_or(TrieError::TornDown)?;
        for idx in letter_indices(rule) {
            node = node.children[idx].get_or_insert_with(Box::default);
        }
        node.terminal = true;
        Ok(())
    }

    /// Exact-membership test.
    ///
    /// Walks the normalized input from the root and returns the terminal flag
    /// of the node reached, or `false` as soon as a required child is absent.
    /// Never mutates the trie. On a torn-down trie this is `false`, not an
    /// error: the read path is total over all inputs and states.
    pub fn search(&self, rule: &str) -> bool {
        let Some(mut node) = self.root.as_ref() else {
            return false;
        };
        for idx in letter_indices(rule) {
            match node.children[idx].as_ref() {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Release every node, leaving the trie rootless.
    ///
    /// Walks the tree with an explicit stack, so teardown depth never tracks
    /// the length of the longest inserted rule. Safe to call repeatedly;
    /// [`init`](RuleTrie::init) is required before further inserts.
    pub fn teardown(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        let mut stack = vec![root];
        while let Some(mut node) = stack.pop() {
            for child in &mut node.children {
                if let Some(child) = child.take() {
                    stack.push(child);
                }
            }
            // node drops here with all children detached
        }
    }
}

impl Default for RuleTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RuleTrie {
    fn drop(&mut self) {
        // Route drop through the iterative teardown; the generated drop glue
        // would otherwise recurse once per trie level.
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_trie_matches_nothing() {
        let trie = RuleTrie::new();
        assert!(!trie.search("anything"));
        assert!(!trie.search(""));
    }

    #[test]
    fn test_insert_then_search() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        assert!(trie.search("hello"));
        assert!(!trie.search("world"));
    }

    #[test]
    fn test_prefix_is_not_a_member() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        assert!(!trie.search("hell"), "stored prefix must not match");
        assert!(!trie.search("helloo"), "extension must not match");

        trie.insert("hell").unwrap();
        assert!(trie.search("hell"), "explicitly inserted prefix matches");
        assert!(trie.search("hello"), "longer rule is unaffected");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Hello, World!", "STOPLOSS", "h3ll0", "", "123!!!", "ünïcode"] {
            assert_eq!(normalize(&normalize(s)), normalize(s), "input: {:?}", s);
        }
    }

    #[test]
    fn test_normalize_drops_digits_rather_than_mapping() {
        assert_eq!(normalize("h3ll0"), "hll");
        assert_ne!(normalize("h3ll0"), normalize("hello"));
    }

    #[test]
    fn test_case_and_noise_insensitive() {
        let mut trie = RuleTrie::new();
        trie.insert("Hello!").unwrap();
        assert!(trie.search("hello"));
        assert!(trie.search("HELLO"));
        assert!(trie.search("h e l l o"));
        assert!(trie.search("h-e-l-l-o"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = RuleTrie::new();
        trie.insert("rule").unwrap();
        trie.insert("rule").unwrap();
        trie.insert("RULE").unwrap();
        assert!(trie.search("rule"));
        assert!(!trie.search("rul"));
    }

    #[test]
    fn test_empty_string_membership() {
        let mut trie = RuleTrie::new();
        assert!(!trie.search(""));
        trie.insert("").unwrap();
        assert!(trie.search(""));
        assert!(!trie.search("a"), "empty rule must not match non-empty input");
    }

    #[test]
    fn test_non_alphabetic_input_degrades_to_empty() {
        let mut trie = RuleTrie::new();
        trie.insert("123!!!").unwrap();
        assert!(trie.search(""));
        assert!(trie.search("456"), "all-noise inputs normalize alike");
        assert!(!trie.search("abc"));
    }

    #[test]
    fn test_unicode_letters_are_stripped() {
        let mut trie = RuleTrie::new();
        trie.insert("naïve").unwrap();
        // 'ï' is not ASCII alphabetic, so the stored rule is "nave"
        assert!(trie.search("nave"));
        assert!(!trie.search("naive"));
    }

    #[test]
    fn test_teardown_clears_all_state() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        trie.insert("").unwrap();
        trie.teardown();

        assert!(!trie.is_initialized());
        assert!(!trie.search("hello"));
        assert!(!trie.search(""), "root terminal flag must not survive teardown");
    }

    #[test]
    fn test_insert_after_teardown_requires_init() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        trie.teardown();

        assert!(matches!(trie.insert("hello"), Err(TrieError::TornDown)));

        trie.init();
        trie.insert("world").unwrap();
        assert!(trie.search("world"));
        assert!(!trie.search("hello"), "re-init starts from an empty trie");
    }

    #[test]
    fn test_teardown_is_reentrant() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        trie.teardown();
        trie.teardown();
        assert!(!trie.search("hello"));
    }

    #[test]
    fn test_init_is_idempotent_on_live_trie() {
        let mut trie = RuleTrie::new();
        trie.insert("hello").unwrap();
        trie.init();
        assert!(trie.search("hello"), "init on a live trie must keep rules");
    }

    #[test]
    fn test_from_rules() {
        let trie = RuleTrie::from_rules(["alpha", "Beta!", "gamma"]);
        assert!(trie.search("alpha"));
        assert!(trie.search("beta"));
        assert!(trie.search("GAMMA"));
        assert!(!trie.search("delta"));
    }

    #[test]
    fn test_deep_trie_teardown_is_iterative() {
        // A rule this long would overflow the stack under recursive teardown
        // or under the generated recursive drop glue.
        let deep = "a".repeat(200_000);
        let mut trie = RuleTrie::new();
        trie.insert(&deep).unwrap();
        assert!(trie.search(&deep));
        assert!(!trie.search(&deep[..deep.len() - 1]));
        trie.teardown();
        assert!(!trie.search(&deep));

        // Same depth again, this time released through Drop.
        let mut trie = RuleTrie::new();
        trie.insert(&deep).unwrap();
        drop(trie);
    }
}
