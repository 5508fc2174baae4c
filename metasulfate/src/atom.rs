//! Shared names with fast cloning and equality checking.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// Prefix marking an atom as pattern variable.
pub const VAR_MARKER: char = '\'';

/// Shared name with fast cloning and equality check.
///
/// Atoms are created only by an [`Atoms`] table,
/// which hands out the same atom for equal names.
/// Comparing two atoms from the same table therefore
/// amounts to comparing their addresses;
/// only atoms from different tables fall back to comparing names.
///
/// ~~~
/// # use metasulfate::Atoms;
/// let atoms = Atoms::new();
/// let a1 = atoms.intern("a");
/// let a2 = atoms.intern("a");
/// let b = atoms.intern("b");
///
/// assert!(a1.ptr_eq(&a2));
/// assert_eq!(a1, a2);
/// assert_ne!(a1, b);
///
/// // atoms with equal names from different tables are equal, yet not shared
/// let other = Atoms::new().intern("a");
/// assert_eq!(a1, other);
/// assert!(!a1.ptr_eq(&other));
/// ~~~
///
/// [`Atoms`]: crate::Atoms
#[derive(Clone, Debug)]
pub struct Atom(Arc<str>);

impl Atom {
    pub(crate) fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Return the name without variable marker if the atom is marked.
    ///
    /// ~~~
    /// # use metasulfate::Atoms;
    /// let atoms = Atoms::new();
    /// assert_eq!(atoms.intern_var("x").var_name(), Some("x"));
    /// assert_eq!(atoms.intern("x").var_name(), None);
    /// ~~~
    pub fn var_name(&self) -> Option<&str> {
        self.0.strip_prefix(VAR_MARKER)
    }

    /// Compare the memory addresses of two atoms.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Atom {}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
