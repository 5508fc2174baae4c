#![forbid(unsafe_code)]

//! Term rewriting engine for the Metasulfate language.
//!
//! This is the library underlying the `meso` interpreter.
//!
//! # Usage
//!
//! A Metasulfate program is a single term.
//! A term is either an atom, such as `A`, `->` or `'x`, or
//! a sequence of terms, such as `[f A [g B]]`.
//! Evaluating a program rewrites its term until no rewrite rule applies anymore.
//!
//! Initially, the only rule is the *declaration rule*:
//! it rewrites any sequence `[p -> r s]` by
//! rewriting `s` with a new rule that replaces terms matching `p` by `r`.
//! Atoms in `p` that start with `'` are pattern variables;
//! their (unmarked) occurrences in `r` are replaced by the terms they matched.
//! A declared rule is visible only inside `s`, and
//! it takes precedence over all rules declared outside of it.
//!
//! The children of a sequence are always rewritten before the sequence itself.
//! For example, to evaluate the program `[f [[g 'x] -> [h x] [g A]]]`,
//! we first rewrite the atom `f`, then the declaration, yielding `[f [h A]]`.
//! Because no rule applies to this term, it is the final result.
//!
//! The state of an evaluation is held by a [`Runtime`],
//! consisting of an [`Atoms`] table that interns all atoms and
//! a [`Cache`] that memoises rewriting results.
//! A runtime can be shared between threads to evaluate several programs in parallel.
//!
//! The following example evaluates a program that adds two natural numbers.
//! (By the way, this example, just as all other code examples in this library,
//! can be executed by running `cargo test`.)
//!
//! ~~~
//! # use metasulfate::{Error, Runtime};
//! let program = "
//!     [ [add 'n Z] -> n
//!     [ [add 'n [S 'm]] -> [S [add n m]]
//!       [add [S Z] [S [S Z]]]
//!     ] ]";
//!
//! let rt = Runtime::new();
//! let tm = rt.parse(program)?;
//! let nf = rt.evaluate(&tm);
//! assert_eq!(nf.to_string(), "[S [S [S Z]]]");
//! # Ok::<_, Error>(())
//! ~~~
//!
//! # Organisation
//!
//! Programs are parsed by the [`parse`] module,
//! which is a re-export of the `metasulfate-parse` crate.
//! The resulting parse terms are converted via [`Share`]
//! to terms whose atoms are interned.
//! Rewriting happens in [`Runtime::rewrite`], which uses
//! [`Pattern`]s to match terms,
//! [`Rule`]s to transform matching terms, and
//! [`RewriteSystem`]s to determine the rules that are in scope.

#[macro_use]
extern crate log;

pub use metasulfate_parse as parse;

mod atom;
mod atoms;
mod bindings;
mod cache;
pub mod error;
pub mod pattern;
mod rewrite;
pub mod rule;
mod runtime;
mod share;
mod system;
mod term;

pub use atom::{Atom, VAR_MARKER};
pub use atoms::Atoms;
pub use bindings::Bindings;
pub use cache::Cache;
pub use error::Error;
pub use pattern::Pattern;
pub use rule::{Function, Rule};
pub use runtime::Runtime;
pub use share::Share;
pub use system::{RewriteSystem, Rules};
pub use term::{Directive, Seq, Term, Tree, ARROW};
