//! Memoisation of rewriting results.

use crate::{RewriteSystem, Term};
use dashmap::DashMap;
use fnv::FnvBuildHasher;

/// Map from a rewrite system and a term to the normal form of the term in the system.
///
/// The cache may be shared between threads.
/// When two threads store a result for the same key,
/// the last store wins, which is harmless because
/// both threads computed the same normal form.
///
/// Keys compare rewrite systems by their rules, so results computed in one scope
/// are found again in any separately built scope with the same rules.
/// Hashing the rewrite system of a key takes constant time,
/// because every rewrite system carries a precomputed hash.
#[derive(Default)]
pub struct Cache(DashMap<(RewriteSystem, Term), Term, FnvBuildHasher>);

impl Cache {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the normal form of the term in the system, if it was stored.
    pub fn get(&self, sys: &RewriteSystem, tm: &Term) -> Option<Term> {
        let key = (sys.clone(), tm.clone());
        self.0.get(&key).map(|nf| nf.value().clone())
    }

    pub fn insert(&self, sys: &RewriteSystem, tm: Term, nf: Term) {
        self.0.insert((sys.clone(), tm), nf);
    }

    /// Return the number of stored normal forms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&self) {
        self.0.clear()
    }
}
