//! Rewrite patterns.

use crate::{Atom, Atoms, Bindings, Term};
use core::fmt::{self, Display};

/// Rewrite pattern.
///
/// This may be nonlinear; e.g. `[eq 'x 'x]` is a valid pattern,
/// matching only sequences whose second and third elements are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// matches the given atom
    Lit(Atom),
    /// matches any term, binding the variable to it
    Var(Atom),
    /// matches a sequence of the same length whose elements match
    Seq(Vec<Pattern>),
    /// matches any term
    Joker,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// a rewrite directive cannot be used as pattern
    Directive,
}

impl Pattern {
    /// Convert a term to a pattern.
    ///
    /// Variable-marked atoms become variables (with the marker removed),
    /// except for `'_`, which becomes a joker.
    ///
    /// ~~~
    /// # use metasulfate::{Error, Pattern, Runtime};
    /// let rt = Runtime::new();
    /// let atoms = rt.atoms();
    ///
    /// let pat = Pattern::new(&rt.parse("[f 'x '_]")?, atoms)?;
    /// let expected = Pattern::Seq(vec![
    ///     Pattern::Lit(atoms.intern("f")),
    ///     Pattern::Var(atoms.intern("x")),
    ///     Pattern::Joker,
    /// ]);
    /// assert_eq!(pat, expected);
    ///
    /// assert!(Pattern::new(&rt.parse("[a -> b c]")?, atoms).is_err());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn new(tm: &Term, atoms: &Atoms) -> Result<Self, Error> {
        match tm {
            Term::Atom(a) => Ok(match a.var_name() {
                Some("_") => Self::Joker,
                Some(v) => Self::Var(atoms.intern(v)),
                None => Self::Lit(a.clone()),
            }),
            Term::Seq(_) if tm.directive().is_some() => Err(Error::Directive),
            Term::Seq(tms) => {
                let pats = tms.iter().map(|tm| Self::new(tm, atoms));
                Ok(Self::Seq(pats.collect::<Result<_, _>>()?))
            }
        }
    }

    /// Match a term against the pattern.
    ///
    /// The term is matched as it is, without rewriting it first.
    /// Return the variable assignments if the term matches.
    pub fn matches(&self, tm: &Term) -> Option<Bindings> {
        match (self, tm) {
            (Self::Lit(a1), Term::Atom(a2)) if a1 == a2 => Some(Bindings::new()),
            (Self::Lit(_), _) => None,
            (Self::Var(v), _) => Some(Bindings::single(v.clone(), tm.clone())),
            (Self::Joker, _) => Some(Bindings::new()),
            (Self::Seq(pats), Term::Seq(tms)) if pats.len() == tms.len() => {
                let mut matches = pats.iter().zip(tms.iter()).map(|(p, t)| p.matches(t));
                matches.try_fold(Bindings::new(), |acc, b| acc.merge(b?))
            }
            (Self::Seq(_), _) => None,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Lit(a) => a.fmt(f),
            Self::Var(v) => write!(f, "'{}", v),
            Self::Seq(pats) => {
                write!(f, "[")?;
                let mut iter = pats.iter();
                if let Some(head) = iter.next() {
                    head.fmt(f)?;
                    iter.try_for_each(|p| write!(f, " {}", p))?;
                }
                write!(f, "]")
            }
            Self::Joker => write!(f, "'_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Runtime;

    fn pattern(rt: &Runtime, s: &str) -> Pattern {
        Pattern::new(&rt.parse(s).unwrap(), rt.atoms()).unwrap()
    }

    #[test]
    fn literal() {
        let rt = Runtime::new();
        let a = rt.parse("A").unwrap();
        assert_eq!(pattern(&rt, "A").matches(&a), Some(Bindings::new()));
        assert_eq!(pattern(&rt, "B").matches(&a), None);
        assert_eq!(pattern(&rt, "[A A]").matches(&a), None);
        assert_eq!(pattern(&rt, "A").matches(&rt.parse("[A A]").unwrap()), None);
    }

    #[test]
    fn variable() {
        let rt = Runtime::new();
        let x = rt.atoms().intern("x");
        for s in ["A", "[]", "[A [B 'c]]", "[a -> b c]"] {
            let tm = rt.parse(s).unwrap();
            let bindings = pattern(&rt, "'x").matches(&tm).unwrap();
            assert_eq!(bindings, Bindings::single(x.clone(), tm));
        }
    }

    #[test]
    fn joker() {
        let rt = Runtime::new();
        let tm = rt.parse("[A B]").unwrap();
        assert_eq!(pattern(&rt, "'_").matches(&tm), Some(Bindings::new()));
        // jokers do not need to match equal terms
        assert_eq!(pattern(&rt, "['_ '_]").matches(&tm), Some(Bindings::new()));
    }

    #[test]
    fn nonlinear() {
        let rt = Runtime::new();
        let pat = pattern(&rt, "['x 'x]");
        let bindings = pat.matches(&rt.parse("[A A]").unwrap()).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(pat.matches(&rt.parse("[A B]").unwrap()), None);

        let pat = pattern(&rt, "[eq [s 'x] [s 'x]]");
        assert!(pat.matches(&rt.parse("[eq [s [f a]] [s [f a]]]").unwrap()).is_some());
        assert!(pat.matches(&rt.parse("[eq [s [f a]] [s [f b]]]").unwrap()).is_none());
    }

    #[test]
    fn arity() {
        let rt = Runtime::new();
        let pat = pattern(&rt, "['x 'y]");
        assert!(pat.matches(&rt.parse("[A B]").unwrap()).is_some());
        assert!(pat.matches(&rt.parse("[A B C]").unwrap()).is_none());
        assert!(pat.matches(&rt.parse("[]").unwrap()).is_none());
        assert!(pat.matches(&rt.parse("A").unwrap()).is_none());

        let empty = pattern(&rt, "[]");
        assert!(empty.matches(&rt.parse("[]").unwrap()).is_some());
        assert!(empty.matches(&rt.parse("[A B]").unwrap()).is_none());
    }

    #[test]
    fn display() {
        let rt = Runtime::new();
        assert_eq!(pattern(&rt, "[f 'x '_ [g y]]").to_string(), "[f 'x '_ [g y]]");
    }
}
