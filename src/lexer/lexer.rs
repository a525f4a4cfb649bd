//! Lexing functions for constructing a token stream.
use log::trace;

use super::{char_ext::*, char_lexer::*, tokens::*};

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    tokens: Vec<Token<'s>>,
}

/// Splits `source` into its tokens, keeping the byte span of each one.
///
/// Lexing never fails: every character is either whitespace, a bracket, or part
/// of an atom. Whether the brackets actually balance is for the compiler to
/// decide.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

/// Splits `source` into its token strings.
pub fn tokenize(source: &str) -> Vec<&str> {
    lex(source).into_iter().map(|token| token.text).collect()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            tokens: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read.
    fn run(mut self) -> Vec<Token<'s>> {
        while self.token() {}
        self.tokens
    }

    /// Skips any separators and reads a single token. Returns `true` if a
    /// token was read, or `false` if the end of the input has been reached.
    fn token(&mut self) -> bool {
        self.lexer.consume_while(CharExt::is_separator);

        if self.lexer.is_finished() {
            return false;
        }

        let token = if self.lexer.peek().is_some_and(|ch| ch.is_bracket()) {
            self.bracket()
        } else {
            self.atom()
        };

        trace!("Read token {:?} at {}", token.text, token.source);
        self.tokens.push(token);
        true
    }

    /// Reads a single bracket character as a token of its own.
    fn bracket(&mut self) -> Token<'s> {
        let (text, span) = self.lexer.consume_char();
        Token::new(text, span)
    }

    /// Reads characters up to the next separator or bracket.
    fn atom(&mut self) -> Token<'s> {
        let (text, span) = self.lexer.consume_while(CharExt::is_atom_char);
        Token::new(text, span)
    }
}
