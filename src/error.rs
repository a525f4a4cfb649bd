use crate::span::Span;

/// An error that can be traced back to a range of bytes in the source text.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;
}
