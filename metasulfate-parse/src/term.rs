use crate::Token;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Parse term.
///
/// Bracket groups are kept as they were written;
/// in particular, `[a]` is a sequence with a single element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term<S> {
    /// literal word, such as `f`, `->` or `42`
    Symb(S),
    /// quoted word, such as `'x`
    Var(S),
    /// bracket group, such as `[f 'x]`
    Seq(Vec<Self>),
}

impl<S: Display> Display for Term<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Symb(s) => s.fmt(f),
            Self::Var(s) => write!(f, "'{}", s),
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

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// `(` without matching `)`
    UnclosedComment,
    /// `)` without preceding `(`
    UnmatchedRPar,
    /// `]` without preceding `[`
    UnmatchedRBrk,
    /// `[` without matching `]`
    UnclosedLBrk,
    /// `'` not followed by a word
    ExpectedWord,
    /// no term in the input
    ExpectedTerm,
    /// tokens after the top-level term
    TrailingTokens,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::UnclosedComment => "unclosed comment",
            Self::UnmatchedRPar => "unmatched closing parenthesis",
            Self::UnmatchedRBrk => "unmatched closing bracket",
            Self::UnclosedLBrk => "unclosed bracket",
            Self::ExpectedWord => "expected word after quote",
            Self::ExpectedTerm => "expected term",
            Self::TrailingTokens => "trailing tokens after term",
        };
        s.fmt(f)
    }
}

type Result<T> = core::result::Result<T, Error>;

/// What the parser can read at a given position.
///
/// `Close` is a sentinel that never becomes part of a term:
/// it ends the enclosing bracket group, and
/// it is an error anywhere else.
#[derive(Debug)]
enum Item<S> {
    Term(Term<S>),
    Close,
}

fn next_token<'s, I>(iter: &mut I) -> Option<Token<'s>>
where
    I: Iterator<Item = Token<'s>>,
{
    iter.find(|token| *token != Token::Space)
}

fn item<'s, I>(iter: &mut I) -> Result<Option<Item<&'s str>>>
where
    I: Iterator<Item = Token<'s>>,
{
    let token = match next_token(iter) {
        None => return Ok(None),
        Some(token) => token,
    };
    let tm = match token {
        Token::Word(s) => Term::Symb(s),
        Token::Quote => match next_token(iter) {
            Some(Token::Word(s)) => Term::Var(s),
            Some(Token::Error) => return Err(Error::UnclosedComment),
            _ => return Err(Error::ExpectedWord),
        },
        Token::LBrk => {
            let mut tms = Vec::new();
            loop {
                match item(iter)?.ok_or(Error::UnclosedLBrk)? {
                    Item::Term(tm) => tms.push(tm),
                    Item::Close => break,
                }
            }
            Term::Seq(tms)
        }
        Token::RBrk => return Ok(Some(Item::Close)),
        Token::RPar => return Err(Error::UnmatchedRPar),
        Token::Error => return Err(Error::UnclosedComment),
        Token::Space => unreachable!("spaces are skipped by next_token"),
    };
    Ok(Some(Item::Term(tm)))
}

impl<'s> Term<&'s str> {
    /// Parse the next term from a token stream.
    ///
    /// Return `None` if the token stream is exhausted.
    /// Tokens following the term are not consumed.
    ///
    /// ~~~
    /// # use metasulfate_parse::{lex, Term};
    /// let mut tokens = lex("a [b 'c] d");
    /// assert_eq!(Term::parse(&mut tokens), Ok(Some(Term::Symb("a"))));
    /// let seq = Term::Seq(vec![Term::Symb("b"), Term::Var("c")]);
    /// assert_eq!(Term::parse(&mut tokens), Ok(Some(seq)));
    /// assert_eq!(Term::parse(&mut tokens), Ok(Some(Term::Symb("d"))));
    /// assert_eq!(Term::parse(&mut tokens), Ok(None));
    /// ~~~
    pub fn parse<I>(iter: &mut I) -> Result<Option<Self>>
    where
        I: Iterator<Item = Token<'s>>,
    {
        match item(iter)? {
            None => Ok(None),
            Some(Item::Close) => Err(Error::UnmatchedRBrk),
            Some(Item::Term(tm)) => Ok(Some(tm)),
        }
    }

    /// Parse a string consisting of exactly one term.
    pub fn parse_str(s: &'s str) -> Result<Self> {
        let mut iter = crate::lex(s);
        let tm = Self::parse(&mut iter)?.ok_or(Error::ExpectedTerm)?;
        match next_token(&mut iter) {
            None => Ok(tm),
            Some(Token::Error) => Err(Error::UnclosedComment),
            Some(Token::RPar) => Err(Error::UnmatchedRPar),
            Some(_) => Err(Error::TrailingTokens),
        }
    }
}

#[test]
fn positive() -> Result<()> {
    use alloc::vec;
    use Term::*;
    let decl = Seq(vec![Symb("A"), Symb("->"), Symb("1"), Symb("A")]);
    assert_eq!(Term::parse_str("[ A -> 1 A ]")?, decl);

    let decl = Seq(vec![Var("x"), Symb("->"), Symb("x"), Symb("B")]);
    assert_eq!(Term::parse_str("[ 'x -> x B ]")?, decl);

    assert_eq!(Term::parse_str("[]")?, Seq(vec![]));
    assert_eq!(Term::parse_str("[a]")?, Seq(vec![Symb("a")]));
    assert_eq!(Term::parse_str("' x")?, Var("x"));
    assert_eq!(Term::parse_str("(comment) a (another (nested) one)")?, Symb("a"));
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    let parse_err = |s: &str| Term::parse_str(s).unwrap_err();
    assert_eq!(parse_err(""), ExpectedTerm);
    assert_eq!(parse_err("(only a comment)"), ExpectedTerm);
    assert_eq!(parse_err("]"), UnmatchedRBrk);
    assert_eq!(parse_err("[a [b]"), UnclosedLBrk);
    assert_eq!(parse_err("'"), ExpectedWord);
    assert_eq!(parse_err("'[a]"), ExpectedWord);
    assert_eq!(parse_err("a b"), TrailingTokens);
    assert_eq!(parse_err("[a] ]"), TrailingTokens);
    assert_eq!(parse_err("a )"), UnmatchedRPar);
    assert_eq!(parse_err(")"), UnmatchedRPar);
    assert_eq!(parse_err("a (b"), UnclosedComment);
    assert_eq!(parse_err("[a (b]"), UnclosedComment);
}

#[test]
fn display() -> Result<()> {
    let src = "[[f 'x] -> [g x] [f []]]";
    let tm = Term::parse_str(src)?;
    assert_eq!(alloc::format!("{}", tm), src);
    Ok(())
}
