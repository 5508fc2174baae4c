//! Conversion of parse structures to shared structures.

use crate::parse::Term as PTerm;
use crate::{Atoms, Term};
use core::borrow::Borrow;

/// Conversion to a structure whose atoms are interned.
pub trait Share<Target> {
    fn share(self, atoms: &Atoms) -> Target;
}

impl<S: Borrow<str>> Share<Term> for PTerm<S> {
    /// Intern all words, and collapse bracket groups with a single element.
    ///
    /// ~~~
    /// # use metasulfate::{parse, Atoms, Share, Term};
    /// let atoms = Atoms::new();
    /// let tm: Term = parse::Term::parse_str("[[f] 'x]")?.share(&atoms);
    /// assert_eq!(tm.to_string(), "[f 'x]");
    /// assert!(tm.get_seq().unwrap()[1].get_atom().unwrap().var_name().is_some());
    /// # Ok::<_, parse::Error>(())
    /// ~~~
    fn share(self, atoms: &Atoms) -> Term {
        match self {
            Self::Symb(s) => Term::Atom(atoms.intern(s.borrow())),
            Self::Var(s) => Term::Atom(atoms.intern_var(s.borrow())),
            Self::Seq(tms) => Term::seq(tms.into_iter().map(|tm| tm.share(atoms)).collect()),
        }
    }
}
