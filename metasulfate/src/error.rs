//! Common error type.

use crate::parse::Error as ParseError;
use crate::pattern::Error as PatternError;
use core::fmt;

/// Common error type.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Pattern(PatternError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Pattern(PatternError::Directive) => {
                write!(f, "pattern error: rewrite directive in pattern")
            }
        }
    }
}

impl std::error::Error for Error {}
