use std::fmt;

use crate::lexer::tokens::Token;

/// The keyword introducing a function definition.
pub const DEFN: &str = "defn";

/// The kinds of top-level form the compiler distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `(defn name [params] ...)`
    Defn,
    /// Anything else. Accepted without being compiled.
    Other,
}

impl Form {
    /// Classifies a form by the token directly after its opening paren.
    pub fn classify(tokens: &[Token]) -> Self {
        match tokens.get(1) {
            Some(head) if head.text == DEFN => Form::Defn,
            _ => Form::Other,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Form::Defn => "a function definition",
            Form::Other => "an unrecognised form",
        })
    }
}
