use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState as AHashRandomState;

/// Per-group running state, created zeroed on first sight of a key.
///
/// Entries are only ever added and updated in place; iteration order of the
/// underlying map is unspecified, so callers that need stable output go
/// through [`AccumulatorTable::into_sorted`].
#[derive(Debug, Clone)]
pub struct AccumulatorTable<K, A> {
    entries: HashMap<K, A, AHashRandomState>,
}

impl<K, A> AccumulatorTable<K, A>
where
    K: Hash + Eq,
    A: Default,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(AHashRandomState::new()),
        }
    }

    /// Returns the accumulator for `key`, inserting `A::default()` if absent.
    #[inline]
    pub fn get_or_init(&mut self, key: K) -> &mut A {
        self.entries.entry(key).or_default()
    }

    pub fn get(&self, key: &K) -> Option<&A> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the table, yielding entries in arbitrary order.
    pub fn into_entries(self) -> impl Iterator<Item = (K, A)> {
        self.entries.into_iter()
    }

    /// Consumes the table, yielding entries in ascending key order.
    pub fn into_sorted(self) -> Vec<(K, A)>
    where
        K: Ord,
    {
        let mut out: Vec<(K, A)> = self.entries.into_iter().collect();
        // Keys are unique, so an unstable sort is still deterministic
        out.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

impl<K, A> Default for AccumulatorTable<K, A>
where
    K: Hash + Eq,
    A: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
