//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Span;

/// A single token, borrowed from the source it was read from.
///
/// Tokens carry no kind of their own: a token is either one of the four
/// [`Bracket`] characters or an atom, and callers tell them apart by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    pub text: &'s str,
    pub source: Span,
}
impl<'s> Token<'s> {
    pub fn new(text: &'s str, source: Span) -> Self {
        Self { text, source }
    }

    /// Returns the bracket this token represents, or [`None`] for atoms.
    pub fn bracket(&self) -> Option<Bracket> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Bracket::from_char(ch),
            _ => None,
        }
    }

    pub fn is_bracket(&self, bracket: Bracket) -> bool {
        self.bracket() == Some(bracket)
    }

    pub fn is_atom(&self) -> bool {
        self.bracket().is_none()
    }
}
impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// One of the four characters that always form a token on their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
}
impl Bracket {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Bracket::OpenParen),
            ')' => Some(Bracket::CloseParen),
            '[' => Some(Bracket::OpenBracket),
            ']' => Some(Bracket::CloseBracket),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bracket::OpenParen => '(',
            Bracket::CloseParen => ')',
            Bracket::OpenBracket => '[',
            Bracket::CloseBracket => ']',
        }
    }
}
impl Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
