//! Useful character extensions.
use super::tokens::Bracket;

pub trait CharExt {
    fn is_bracket(&self) -> bool;

    fn is_atom_char(&self) -> bool;

    fn is_separator(&self) -> bool {
        !self.is_bracket() && !self.is_atom_char()
    }
}
impl CharExt for char {
    fn is_bracket(&self) -> bool {
        Bracket::from_char(*self).is_some()
    }

    fn is_atom_char(&self) -> bool {
        !self.is_whitespace() && !self.is_bracket()
    }
}
