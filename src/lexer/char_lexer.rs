use std::{iter::Peekable, str::Chars};

use crate::span::{Bytes, Span};

/// Abstraction over a peekable char iterator with position information.
///
/// The lexer keeps a reference to the full source, so anything it consumes can
/// be handed out as a slice of the source rather than a freshly allocated
/// [`String`].
#[derive(Clone)]
pub struct CharLexer<'s> {
    source: &'s str,
    chars: Peekable<Chars<'s>>,
    byte_position: Bytes,
}

impl<'s> CharLexer<'s> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consumes a single character, returning it as a slice of the source.
    /// At the end of the input, the slice is empty.
    pub fn consume_char(&mut self) -> (&'s str, Span) {
        let start = self.byte_position;
        self.try_next();
        let span = Span::new(start, self.byte_position);
        (span.lookup(self.source), span)
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the slice of the source that was consumed, together with its span.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> (&'s str, Span)
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position;
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                self.try_next();
            } else {
                break;
            }
        }
        let span = Span::new(start, self.byte_position);
        (span.lookup(self.source), span)
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&mut self) -> bool {
        self.peek().is_none()
    }
}
