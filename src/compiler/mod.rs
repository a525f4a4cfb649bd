//! Compiles a token stream into a table of function definitions.
mod compiler;
mod diagnostic;
mod form;
mod state;

pub use compiler::{compile, compile_tokens};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use form::Form;
pub use state::{CompilationState, FunctionDefinition};
