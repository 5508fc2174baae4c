//! Persistent chains of rewrite rules.

use crate::Rule;
use core::fmt;
use core::hash::{Hash, Hasher};
use fnv::FnvHasher;
use std::sync::Arc;

/// Rewrite system, i.e. a chain of rewrite rules.
///
/// The most recently added rule comes first.
/// Extending a system shares the existing rules with the extended system.
///
/// Two rewrite systems are equal if they contain equal rules in the same order,
/// even if they were built separately:
///
/// ~~~
/// # use metasulfate::{RewriteSystem, Rule};
/// let sys = RewriteSystem::new().extend(Rule::Declaration);
/// let other = RewriteSystem::new().extend(Rule::Declaration);
/// assert!(!sys.ptr_eq(&other));
/// assert_eq!(sys, other);
/// assert_ne!(sys, other.extend(Rule::Declaration));
/// assert_eq!(RewriteSystem::new(), RewriteSystem::new());
/// ~~~
#[derive(Clone, Default)]
pub struct RewriteSystem(Option<Arc<Link>>);

struct Link {
    rule: Rule,
    outer: RewriteSystem,
    /// hash of the rule combined with the hash of the outer system
    hash: u64,
}

impl RewriteSystem {
    /// Construct a rewrite system without rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a rewrite system containing only the declaration rule.
    pub fn base() -> Self {
        Self::new().extend(Rule::Declaration)
    }

    /// Add a rule that takes precedence over all rules in the system.
    ///
    /// Adding the empty rule yields the same system.
    ///
    /// ~~~
    /// # use metasulfate::{RewriteSystem, Rule};
    /// let sys = RewriteSystem::base();
    /// assert_eq!(sys.clone().extend(Rule::Empty), sys);
    /// assert_eq!(sys.extend(Rule::Declaration).len(), 2);
    /// ~~~
    pub fn extend(self, rule: Rule) -> Self {
        if rule == Rule::Empty {
            return self;
        }
        let mut state = FnvHasher::default();
        rule.hash(&mut state);
        state.write_u64(self.hash_value());
        let hash = state.finish();
        Self(Some(Arc::new(Link { rule, outer: self, hash })))
    }

    fn hash_value(&self) -> u64 {
        self.0.as_ref().map_or(0, |link| link.hash)
    }

    /// Add all rules of another system, preserving their order.
    ///
    /// ~~~
    /// # use metasulfate::{Atoms, RewriteSystem, Rule};
    /// let atoms = Atoms::new();
    /// let [a, b, c] = ["a", "b", "c"].map(|s| atoms.intern(s));
    /// let ab = Rule::Subst(a.clone(), b.clone().into());
    /// let bc = Rule::Subst(b, c.into());
    ///
    /// let other = RewriteSystem::new().extend(ab.clone()).extend(bc.clone());
    /// let sys = RewriteSystem::base().extend_all(&other);
    /// let rules: Vec<_> = sys.rules().cloned().collect();
    /// assert_eq!(rules, vec![bc, ab, Rule::Declaration]);
    /// ~~~
    pub fn extend_all(self, other: &Self) -> Self {
        let mut rules: Vec<_> = other.rules().collect();
        rules.reverse();
        rules.into_iter().fold(self, |sys, rule| sys.extend(rule.clone()))
    }

    /// Iterate over the rules, most recently added first.
    pub fn rules(&self) -> Rules {
        Rules(self.0.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rules().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Return true if both systems are the same chain.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(l1), Some(l2)) => Arc::ptr_eq(l1, l2),
            (None, None) => true,
            _ => false,
        }
    }

    /// Return true if the systems contain different user-defined rules with equal patterns.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return false;
        }
        self.rules().any(|r1| {
            let p1 = r1.pattern();
            let conflict = |r2: &Rule| p1.is_some() && r2.pattern() == p1 && r1 != r2;
            other.rules().any(conflict)
        })
    }
}

/// Iterator over the rules of a rewrite system, obtained by [`RewriteSystem::rules`].
pub struct Rules<'a>(Option<&'a Link>);

impl<'a> Iterator for Rules<'a> {
    type Item = &'a Rule;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.0?;
        self.0 = link.outer.0.as_deref();
        Some(&link.rule)
    }
}

impl PartialEq for RewriteSystem {
    fn eq(&self, other: &Self) -> bool {
        let (mut l, mut r) = (self, other);
        loop {
            match (&l.0, &r.0) {
                (None, None) => return true,
                (Some(ll), Some(rl)) => {
                    if Arc::ptr_eq(ll, rl) {
                        return true;
                    }
                    if ll.hash != rl.hash || ll.rule != rl.rule {
                        return false;
                    }
                    (l, r) = (&ll.outer, &rl.outer)
                }
                _ => return false,
            }
        }
    }
}

impl Eq for RewriteSystem {}

impl Hash for RewriteSystem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value())
    }
}

impl Drop for RewriteSystem {
    // dropping long chains recursively may exhaust the stack
    fn drop(&mut self) {
        let mut cur = self.0.take();
        while let Some(link) = cur {
            cur = match Arc::try_unwrap(link) {
                Ok(mut link) => link.outer.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl fmt::Display for RewriteSystem {
    /// Show the rules, oldest first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rules: Vec<_> = self.rules().collect();
        rules.reverse();
        write!(f, "{{")?;
        let mut iter = rules.into_iter();
        if let Some(head) = iter.next() {
            head.fmt(f)?;
            iter.try_for_each(|rule| write!(f, ", {}", rule))?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for RewriteSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.rules()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, Runtime};

    #[test]
    fn sharing() {
        let base = RewriteSystem::base();
        let ext1 = base.clone().extend(Rule::Declaration);
        let ext2 = base.clone().extend(Rule::Declaration);
        assert!(!ext1.ptr_eq(&ext2));
        assert_eq!(ext1, ext2);
        assert_eq!(ext1.rules().nth(1), base.rules().next());
        assert!(ext1.0.as_ref().unwrap().outer.ptr_eq(&base));
        assert!(ext2.0.as_ref().unwrap().outer.ptr_eq(&base));
    }

    #[test]
    fn long_chain() {
        let sys = (0..1_000_000).fold(RewriteSystem::new(), |sys, _| sys.extend(Rule::Declaration));
        assert_eq!(sys.len(), 1_000_000);
        drop(sys)
    }

    #[test]
    fn structural() {
        use std::collections::hash_map::DefaultHasher;
        let hash = |sys: &RewriteSystem| {
            let mut state = DefaultHasher::new();
            sys.hash(&mut state);
            state.finish()
        };
        let rt = Runtime::new();
        let [a, b] = ["a", "b"].map(|s| rt.atoms().intern(s));
        let subst = |x: &Atom, y: &Atom| Rule::Subst(x.clone(), y.clone().into());
        let ab1 = RewriteSystem::base().extend(subst(&a, &b));
        let ab2 = RewriteSystem::base().extend(subst(&a, &b));
        let ba = RewriteSystem::base().extend(subst(&b, &a));
        assert_eq!(ab1, ab2);
        assert_eq!(hash(&ab1), hash(&ab2));
        assert_ne!(ab1, ba);
        // same rules, different order
        let abba = ab1.clone().extend(subst(&b, &a));
        let baab = ba.clone().extend(subst(&a, &b));
        assert_ne!(abba, baab);
        // a prefix is not equal to the whole
        assert_ne!(abba, ab1);
        assert_ne!(RewriteSystem::new(), RewriteSystem::base());
    }

    #[test]
    fn conflicts() {
        use crate::{rule::Function, Pattern};
        let rt = Runtime::new();
        let fun = |pat, body| {
            let pat = Pattern::new(&rt.parse(pat).unwrap(), rt.atoms()).unwrap();
            let body = rt.parse(body).unwrap();
            Rule::Function(Arc::new(Function::new(pat, body, rt.base())))
        };
        let fx = fun("[f 'x]", "x");
        let sys1 = rt.base().extend(fx.clone());
        let sys2 = rt.base().extend(fun("[f 'x]", "A"));
        let sys3 = rt.base().extend(fun("[g 'x]", "A")).extend(fx);

        assert!(sys1.conflicts_with(&sys2));
        assert!(sys2.conflicts_with(&sys3));
        assert!(!sys1.conflicts_with(&sys1));
        // equal rules do not conflict
        assert!(!sys1.conflicts_with(&sys3));
        assert!(!rt.base().conflicts_with(&RewriteSystem::base()));
    }

    #[test]
    fn display() {
        let rt = Runtime::new();
        let a = rt.atoms().intern("a");
        let sys = RewriteSystem::base().extend(Rule::Subst(a, rt.parse("[b c]").unwrap()));
        assert_eq!(sys.to_string(), "{declaration, a ↦ [b c]}");
        assert_eq!(RewriteSystem::new().to_string(), "{}");
    }
}
