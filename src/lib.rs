//! Front end for a small Lisp: a tokenizer, and a compiler that collects the
//! functions declared by `defn` forms.
//!
//! ```
//! use lispc::{compile, CompilationState};
//!
//! let mut state = CompilationState::new();
//! compile("(defn add [a b] (+ a b))", &mut state);
//! assert_eq!(state.function("add").unwrap().params(), ["a", "b"]);
//! ```
pub mod compiler;
pub mod error;
pub mod ext;
pub mod lexer;
pub mod source_map;
pub mod span;

pub use compiler::{compile, CompilationState};
pub use lexer::tokenize;
