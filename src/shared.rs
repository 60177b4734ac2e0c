use parking_lot::RwLock;

use crate::error::Result;
use crate::trie::RuleTrie;

/// Thread-safe wrapper around [`RuleTrie`].
///
/// Insert, init and teardown take the write lock; search takes the read lock.
/// Lookups run concurrently with each other but never overlap a mutation,
/// which is exactly the access discipline the bare trie requires: one writer
/// or many readers, never both. Wrap it in an [`std::sync::Arc`] to share
/// across threads.
#[derive(Debug, Default)]
pub struct SharedRuleTrie {
    inner: RwLock<RuleTrie>,
}

impl SharedRuleTrie {
    /// Create an initialized, empty shared trie.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RuleTrie::new()),
        }
    }

    /// Build a shared trie containing every rule in `rules`.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inner: RwLock::new(RuleTrie::from_rules(rules)),
        }
    }

    /// Insert a rule. See [`RuleTrie::insert`].
    pub fn insert(&self, rule: &str) -> Result<()> {
        self.inner.write().insert(rule)
    }

    /// Exact-membership test. See [`RuleTrie::search`].
    pub fn search(&self, rule: &str) -> bool {
        self.inner.read().search(rule)
    }

    /// Re-establish an empty root after teardown. See [`RuleTrie::init`].
    pub fn init(&self) {
        self.inner.write().init();
    }

    /// Release every node. See [`RuleTrie::teardown`].
    pub fn teardown(&self) {
        self.inner.write().teardown();
    }

    /// See [`RuleTrie::is_initialized`].
    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_initialized()
    }
}
