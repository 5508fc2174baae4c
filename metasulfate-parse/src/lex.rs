use core::fmt::{self, Display};
use logos::{Lexer, Logos};

#[derive(Logos, Clone, Debug, PartialEq, Eq)]
pub enum Token<'s> {
    #[token("[")]
    LBrk,

    #[token("]")]
    RBrk,

    #[token("'")]
    Quote,

    /// closing parenthesis outside of any comment
    #[token(")")]
    RPar,

    #[regex(r"[^ \t\r\n\f\[\]()']+", |lex| lex.slice())]
    Word(&'s str),

    #[regex(r"[ \t\r\n\f]+")]
    #[token("(", comment)]
    Space,

    // Logos requires one token variant to handle errors,
    // here it is only produced by unclosed comments.
    #[error]
    Error,
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            Self::LBrk => "[",
            Self::RBrk => "]",
            Self::Quote => "'",
            Self::RPar => ")",
            Self::Word(s) => s,
            Self::Space => " ",
            Self::Error => return Err(Default::default()),
        };
        s.fmt(f)
    }
}

/// Skip a (possibly nested) comment, whose opening parenthesis was just consumed.
fn comment<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<()> {
    // number of open comments
    let mut open = 1;
    let parens: &[_] = &['(', ')'];
    while open > 0 {
        // go to first occurrence of either '(' or ')'
        let pos = match lex.remainder().find(parens) {
            Some(pos) => pos,
            None => {
                // the comment extends to the end of the input
                lex.bump(lex.remainder().len());
                return None;
            }
        };
        if lex.remainder()[pos..].starts_with('(') {
            open += 1;
        } else {
            open -= 1;
        }
        lex.bump(pos + 1);
    }
    Some(())
}

#[test]
fn words() {
    let tokens: alloc::vec::Vec<_> = crate::lex("[ 'x -> x 42 ]").collect();
    use Token::*;
    let expected = [LBrk, Quote, Word("x"), Word("->"), Word("x"), Word("42"), RBrk];
    assert_eq!(tokens, expected);
}

#[test]
fn comments() {
    let tokens: alloc::vec::Vec<_> = crate::lex("a (b (c) d) e").collect();
    assert_eq!(tokens, [Token::Word("a"), Token::Word("e")]);

    let tokens: alloc::vec::Vec<_> = crate::lex("a (b (c) d e").collect();
    assert_eq!(tokens, [Token::Word("a"), Token::Error]);

    let tokens: alloc::vec::Vec<_> = crate::lex("a) b").collect();
    assert_eq!(tokens, [Token::Word("a"), Token::RPar, Token::Word("b")]);
}

#[test]
fn adjacent_punctuation() {
    use Token::*;
    let tokens: alloc::vec::Vec<_> = crate::lex("[f[g'x]]").collect();
    let expected = [LBrk, Word("f"), LBrk, Word("g"), Quote, Word("x"), RBrk, RBrk];
    assert_eq!(tokens, expected);
}
