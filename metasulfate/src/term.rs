//! Terms, consisting of atoms and sequences.

use crate::Atom;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// Name of the atom that marks a rewrite directive.
pub const ARROW: &str = "->";

/// Term, i.e. an atom or a sequence of terms.
///
/// Terms are immutable; cloning a term is constant-time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(Atom),
    Seq(Seq),
}

/// Sequence of terms with shared elements.
#[derive(Clone, Debug)]
pub struct Seq(Arc<[Term]>);

impl Seq {
    /// Compare the memory addresses of two sequences.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl core::ops::Deref for Seq {
    type Target = [Term];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Seq {}

impl Hash for Seq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

/// View of a rewrite directive `[pattern -> replacement subject]`.
#[derive(Debug)]
pub struct Directive<'a> {
    pub pattern: &'a Term,
    pub replacement: &'a Term,
    pub subject: &'a Term,
}

impl Term {
    /// Construct a sequence from terms.
    ///
    /// A sequence of a single term is that term:
    ///
    /// ~~~
    /// # use metasulfate::{Atoms, Term};
    /// let a = Term::Atom(Atoms::new().intern("a"));
    /// assert_eq!(Term::seq(vec![a.clone()]), a);
    /// assert_ne!(Term::seq(vec![]), a);
    /// ~~~
    pub fn seq(mut tms: Vec<Self>) -> Self {
        if tms.len() == 1 {
            if let Some(tm) = tms.pop() {
                return tm;
            }
        }
        Self::Seq(Seq(Arc::from(tms)))
    }

    pub fn get_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(a) => Some(a),
            Self::Seq(_) => None,
        }
    }

    pub fn get_seq(&self) -> Option<&Seq> {
        match self {
            Self::Atom(_) => None,
            Self::Seq(s) => Some(s),
        }
    }

    /// Return true if the term is the atom with the given name.
    pub fn is_atom(&self, name: &str) -> bool {
        self.get_atom().map_or(false, |a| a.name() == name)
    }

    /// Recognise a rewrite directive.
    ///
    /// ~~~
    /// # use metasulfate::{Error, Runtime};
    /// let rt = Runtime::new();
    /// let tm = rt.parse("[[f 'x] -> x [f a]]")?;
    /// let dir = tm.directive().unwrap();
    /// assert_eq!(dir.pattern.to_string(), "[f 'x]");
    /// assert_eq!(dir.replacement.to_string(), "x");
    /// assert_eq!(dir.subject.to_string(), "[f a]");
    ///
    /// assert!(rt.parse("[[f 'x] => x [f a]]")?.directive().is_none());
    /// assert!(rt.parse("[[f 'x] -> x]")?.directive().is_none());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn directive(&self) -> Option<Directive> {
        match &**self.get_seq()? {
            [pattern, arrow, replacement, subject] if arrow.is_atom(ARROW) => Some(Directive {
                pattern,
                replacement,
                subject,
            }),
            _ => None,
        }
    }

    /// Compare the memory addresses of two terms.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atom(a1), Self::Atom(a2)) => a1.ptr_eq(a2),
            (Self::Seq(s1), Self::Seq(s2)) => s1.ptr_eq(s2),
            _ => false,
        }
    }

    /// Display the term as a tree, one atom per line.
    ///
    /// ~~~
    /// # use metasulfate::{Error, Runtime};
    /// let tm = Runtime::new().parse("[S [S Z] []]")?;
    /// let expected = "\
    /// ┬─ S
    /// ├─┬─ S
    /// │ └─ Z
    /// └─ []
    /// ";
    /// assert_eq!(tm.tree().to_string(), expected);
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn tree(&self) -> Tree {
        Tree(self)
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Self::Atom(a)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(a) => a.fmt(f),
            Self::Seq(tms) => {
                write!(f, "[")?;
                let mut iter = tms.iter();
                if let Some(head) = iter.next() {
                    head.fmt(f)?;
                    iter.try_for_each(|tm| write!(f, " {}", tm))?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Tree rendering of a term, obtained by [`Term::tree`].
pub struct Tree<'a>(&'a Term);

impl<'a> Tree<'a> {
    /// Write the elements of a nonempty sequence.
    ///
    /// The first element is written on the current line,
    /// all other elements on separate lines preceded by `prefix`.
    fn fmt_seq(tms: &[Term], prefix: &str, f: &mut fmt::Formatter) -> fmt::Result {
        let last = tms.len() - 1;
        for (i, tm) in tms.iter().enumerate() {
            let (branch, indent) = match (i, i == last) {
                (0, _) => ("┬─", "│ "),
                (_, false) => ("├─", "│ "),
                (_, true) => ("└─", "  "),
            };
            if i > 0 {
                write!(f, "{}", prefix)?;
            }
            write!(f, "{}", branch)?;
            match tm {
                Term::Seq(s) if !s.is_empty() => Self::fmt_seq(s, &(prefix.to_owned() + indent), f)?,
                _ => writeln!(f, " {}", tm)?,
            }
        }
        Ok(())
    }
}

impl<'a> Display for Tree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Term::Seq(s) if !s.is_empty() => Self::fmt_seq(s, "", f),
            tm => writeln!(f, "{}", tm),
        }
    }
}
