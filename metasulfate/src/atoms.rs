//! Maps from strings to (shared) atoms.

use crate::atom::{Atom, VAR_MARKER};
use dashmap::DashMap;
use fnv::FnvBuildHasher;

/// Map from strings to (shared) atoms.
///
/// Interning is safe under concurrent calls:
/// if two threads intern the same new name at the same time,
/// only the first insertion is kept, and
/// both threads obtain the atom of that first insertion.
#[derive(Default)]
pub struct Atoms(DashMap<Box<str>, Atom, FnvBuildHasher>);

impl Atoms {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the atom for the given name, creating it on first use.
    pub fn intern(&self, name: &str) -> Atom {
        if let Some(atom) = self.0.get(name) {
            return atom.value().clone();
        }
        let entry = self.0.entry(Box::from(name));
        entry.or_insert_with(|| Atom::new(name)).value().clone()
    }

    /// Return the variable-marked atom for the given name.
    ///
    /// ~~~
    /// # use metasulfate::Atoms;
    /// let atoms = Atoms::new();
    /// assert_eq!(atoms.intern_var("x"), atoms.intern("'x"));
    /// ~~~
    pub fn intern_var(&self, name: &str) -> Atom {
        let mut marked = String::with_capacity(name.len() + 1);
        marked.push(VAR_MARKER);
        marked.push_str(name);
        self.intern(&marked)
    }

    /// Return the atom for the given name if it was interned before.
    pub fn get(&self, name: &str) -> Option<Atom> {
        self.0.get(name).map(|atom| atom.value().clone())
    }

    /// Return the number of interned atoms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn concurrent_interning() {
    let atoms = Atoms::new();
    let names = ["a", "b", "c", "d"];
    let interned: Vec<Vec<Atom>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| names.iter().map(|n| atoms.intern(n)).collect()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(atoms.len(), names.len());
    for atoms_of_thread in &interned {
        for (a, b) in atoms_of_thread.iter().zip(&interned[0]) {
            assert!(a.ptr_eq(b))
        }
    }
}
