//! Diagnostics reported by the compiler.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::Span};

/// The structural checks a compilation unit can fail.
/// The [`Display`] form of each kind is the exact message reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Unbalanced parens")]
    UnbalancedParens,
    #[error("Missing params")]
    MissingParams,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    range: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Span) -> Self {
        Self { kind, range }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))
    }
}

impl PositionalError for Diagnostic {
    fn range(&self) -> Span {
        self.range
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
