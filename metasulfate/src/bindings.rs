//! Variable assignments produced by pattern matching.

use crate::{Atom, RewriteSystem, Rule, Term};
use core::fmt;

/// Immutable HashMap for fast cloning of bindings.
type FnvHashMap<K, V> = im::hashmap::HashMap<K, V, fnv::FnvBuildHasher>;

/// Map from pattern variables (without variable marker) to captured terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings(FnvHashMap<Atom, Term>);

impl Bindings {
    /// Construct empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct bindings that assign a single variable.
    pub fn single(var: Atom, tm: Term) -> Self {
        Self(FnvHashMap::default().update(var, tm))
    }

    pub fn get(&self, var: &Atom) -> Option<&Term> {
        self.0.get(var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, &Term)> {
        self.0.iter()
    }

    /// Combine two bindings if they agree on all their common variables.
    ///
    /// ~~~
    /// # use metasulfate::{Atoms, Bindings, Term};
    /// let atoms = Atoms::new();
    /// let [x, y, a, b] = ["x", "y", "a", "b"].map(|s| atoms.intern(s));
    /// let xa = Bindings::single(x.clone(), a.clone().into());
    /// let xb = Bindings::single(x.clone(), b.clone().into());
    /// let yb = Bindings::single(y.clone(), b.clone().into());
    ///
    /// assert_eq!(xa.clone().merge(xa.clone()), Some(xa.clone()));
    /// assert_eq!(xa.clone().merge(xb), None);
    ///
    /// let xayb = xa.merge(yb).unwrap();
    /// assert_eq!(xayb.len(), 2);
    /// assert_eq!(xayb.get(&y), Some(&Term::from(b)));
    /// ~~~
    pub fn merge(self, other: Self) -> Option<Self> {
        if self == other || other.is_empty() {
            return Some(self);
        }
        if self.is_empty() {
            return Some(other);
        }
        let agree = |(var, tm): (&Atom, &Term)| self.0.get(var).map_or(true, |tm2| tm == tm2);
        if other.iter().all(agree) {
            Some(Self(self.0.union(other.0)))
        } else {
            None
        }
    }

    /// Return a rewrite system that replaces every variable by its assigned term.
    pub fn to_system(&self) -> RewriteSystem {
        let subst = |var: &Atom, tm: &Term| Rule::Subst(var.clone(), tm.clone());
        let rules = self.iter().map(|(var, tm)| subst(var, tm));
        rules.fold(RewriteSystem::new(), |sys, rule| sys.extend(rule))
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((var, tm)) = iter.next() {
            write!(f, "{} ↦ {}", var, tm)?;
            iter.try_for_each(|(var, tm)| write!(f, ", {} ↦ {}", var, tm))?;
        }
        write!(f, "}}")
    }
}
