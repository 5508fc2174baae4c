//! Engine context.

use crate::parse::Term as PTerm;
use crate::{Atoms, Cache, Error, RewriteSystem, Share, Term};

/// Engine context, holding all state that is shared between rewriting steps.
///
/// A runtime may be shared between threads,
/// which may rewrite terms concurrently.
///
/// ~~~
/// # use metasulfate::{Error, Runtime};
/// let rt = Runtime::new();
/// let tm = rt.parse("[[not T] -> F [and [not T] [not F]]]")?;
/// assert_eq!(rt.evaluate(&tm), rt.parse("[and F [not F]]")?);
/// # Ok::<_, Error>(())
/// ~~~
pub struct Runtime {
    atoms: Atoms,
    cache: Cache,
    base: RewriteSystem,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            atoms: Atoms::new(),
            cache: Cache::new(),
            base: RewriteSystem::base(),
        }
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Return the rewrite system containing only the declaration rule.
    ///
    /// This returns the same system on every call.
    pub fn base(&self) -> RewriteSystem {
        self.base.clone()
    }

    /// Rewrite a term in the base system.
    pub fn evaluate(&self, tm: &Term) -> Term {
        self.rewrite(&self.base, tm)
    }

    /// Parse a string consisting of a single term and intern its atoms.
    pub fn parse(&self, s: &str) -> Result<Term, Error> {
        Ok(PTerm::parse_str(s)?.share(&self.atoms))
    }

    /// Parse a string and evaluate the resulting term.
    ///
    /// ~~~
    /// # use metasulfate::{Error, Runtime};
    /// let rt = Runtime::new();
    /// assert_eq!(rt.eval_str("[ 'x -> x B ]")?.to_string(), "B");
    /// assert!(rt.eval_str("[ 'x -> x B").is_err());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn eval_str(&self, s: &str) -> Result<Term, Error> {
        Ok(self.evaluate(&self.parse(s)?))
    }

    /// Forget all memoised normal forms.
    pub fn clear_cache(&self) {
        self.cache.clear()
    }
}
