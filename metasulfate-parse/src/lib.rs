//! Lexer and parser for Metasulfate terms.
//!
//! A Metasulfate program is a single term.
//! A term is either a word, a quoted word, or
//! a bracket group of terms.
//! Parenthesised regions are (nestable) comments.
//!
//! Example usage:
//!
//! ~~~
//! use metasulfate_parse::{Error, Term};
//!
//! let tm = Term::parse_str("[ 'x -> x B ] (identity, applied to B)")?;
//! assert_eq!(tm.to_string(), "['x -> x B]");
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

pub mod lex;
pub mod term;

pub use lex::Token;
pub use term::{Error, Term};

use logos::Logos;

/// Lex a string, omitting whitespace and comments.
pub fn lex(s: &str) -> impl Iterator<Item = Token<'_>> {
    Token::lexer(s).filter(|token| *token != Token::Space)
}
