use log::trace;

use crate::{
    lexer::{
        lex,
        tokens::{Bracket, Token},
    },
    span::Span,
};

use super::{
    diagnostic::{Diagnostic, DiagnosticKind},
    form::Form,
    state::{CompilationState, FunctionDefinition},
};

/// Tokenizes and compiles `source`, recording the outcome in `state`.
///
/// Any diagnostic left over from a previous call is replaced. When a diagnostic
/// is reported, no function is registered for this call.
pub fn compile(source: &str, state: &mut CompilationState) {
    compile_tokens(&lex(source), state)
}

/// Compiles an already tokenized form, recording the outcome in `state`.
pub fn compile_tokens(tokens: &[Token], state: &mut CompilationState) {
    state.clear_diagnostic();

    if let Err(diagnostic) = check_balance(tokens) {
        state.report(diagnostic);
        return;
    }

    let form = Form::classify(tokens);
    trace!("Compiling {}", form);

    match form {
        Form::Defn => match defn(tokens) {
            Ok(function) => state.register(function),
            Err(diagnostic) => state.report(diagnostic),
        },
        Form::Other => {}
    }
}

/// Only the final token is inspected: a stream is balanced if it ends in `)`.
/// Mismatched nesting earlier in the stream is not detected.
fn check_balance(tokens: &[Token]) -> Result<(), Diagnostic> {
    match tokens.last() {
        Some(last) if last.is_bracket(Bracket::CloseParen) => Ok(()),
        Some(last) => Err(Diagnostic::new(
            DiagnosticKind::UnbalancedParens,
            last.source,
        )),
        None => Err(Diagnostic::new(
            DiagnosticKind::UnbalancedParens,
            Span::zero(),
        )),
    }
}

/// Reads the name and parameter list of a `defn` form.
/// Expects [`Form::classify`] to have recognised the form and the balance
/// check to have passed, so the stream holds at least `( defn x`.
fn defn(tokens: &[Token]) -> Result<FunctionDefinition, Diagnostic> {
    // Taken as-is, even when it is a bracket.
    let name = tokens[2];

    let position = |bracket: Bracket| tokens.iter().position(|token| token.is_bracket(bracket));
    let (param_start, param_end) =
        match (position(Bracket::OpenBracket), position(Bracket::CloseBracket)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(Diagnostic::new(
                    DiagnosticKind::MissingParams,
                    name.source,
                ))
            }
        };

    // A `]` before the `[` leaves nothing between them.
    let params = tokens
        .get(param_start + 1..param_end)
        .unwrap_or_default()
        .iter()
        .filter(|token| token.is_atom())
        .map(|token| token.text.to_string())
        .collect();

    Ok(FunctionDefinition::new(name.text, params))
}

#[cfg(test)]
mod tests {
    use crate::{
        error::PositionalError,
        span::{Bytes, Span},
    };

    use super::*;

    macro_rules! assert_compiles {
        ($source:expr) => {{
            let mut state = CompilationState::new();
            compile($source, &mut state);
            if let Some(diagnostic) = state.diagnostic() {
                panic!(
                    "\n\nEncountered diagnostic:\n    {}\nWhen compiling:\n    {}\n\n",
                    diagnostic, $source,
                );
            }
            state
        }};
    }

    macro_rules! assert_diagnoses {
        ($source:expr, $kind:expr) => {{
            let mut state = CompilationState::new();
            compile($source, &mut state);
            match state.diagnostic() {
                Some(diagnostic) => assert_eq!(
                    diagnostic.kind(),
                    $kind,
                    "\n\nWhen compiling:\n    {}\nExpected:\n    {}\nBut found:\n    {}\n\n",
                    $source,
                    $kind,
                    diagnostic
                ),
                None => panic!(
                    "\n\nExpected diagnostic:\n    {}\nWhen compiling:\n    {}\nBut compilation succeeded\n\n",
                    $kind, $source,
                ),
            }
            state
        }};
    }

    fn params_of<'a>(state: &'a CompilationState, name: &str) -> Vec<&'a str> {
        state
            .function(name)
            .unwrap_or_else(|| panic!("Function '{name}' not added, but should have been."))
            .params()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn adds_a_new_function_to_state() {
        let state = assert_compiles!("(defn f [])");

        assert_eq!(params_of(&state, "f"), Vec::<&str>::new());
        assert_eq!(state.functions().len(), 1);
    }

    #[test]
    fn adds_a_differently_named_function_to_state() {
        let state = assert_compiles!("(defn a [])");

        assert!(state.function("a").is_some());
        assert!(state.function("f").is_none());
    }

    #[test]
    fn determines_param_names_in_order() {
        let state = assert_compiles!("(defn f [a b c])");

        assert_eq!(params_of(&state, "f"), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_params_are_kept() {
        let state = assert_compiles!("(defn f [x x])");

        assert_eq!(params_of(&state, "f"), vec!["x", "x"]);
    }

    #[test]
    fn body_after_params_is_ignored() {
        let state = assert_compiles!("(defn add [a b] (+ a b))");

        assert_eq!(params_of(&state, "add"), vec!["a", "b"]);
    }

    #[test]
    fn only_atoms_between_brackets_are_params() {
        let state = assert_compiles!("(defn f [a ( b ) c])");

        assert_eq!(params_of(&state, "f"), vec!["a", "b", "c"]);
    }

    #[test]
    fn plus_does_not_create_a_function() {
        let state = assert_compiles!("(+ 1 1)");

        assert!(state.functions().is_empty());
        assert!(state.is_ok());
    }

    #[test]
    fn error_if_unbalanced_parens() {
        let state = assert_diagnoses!("(defn one [", DiagnosticKind::UnbalancedParens);

        assert_eq!(
            state.diagnostic().map(ToString::to_string).as_deref(),
            Some("Unbalanced parens")
        );
        assert!(state.functions().is_empty());
    }

    #[test]
    fn error_if_params_missing() {
        let state = assert_diagnoses!("(defn one )", DiagnosticKind::MissingParams);

        assert_eq!(
            state.diagnostic().map(ToString::to_string).as_deref(),
            Some("Missing params")
        );
        assert!(state.function("one").is_none());
    }

    #[test]
    fn error_if_either_param_bracket_missing() {
        assert_diagnoses!("(defn one [a b)", DiagnosticKind::MissingParams);
        assert_diagnoses!("(defn one a b])", DiagnosticKind::MissingParams);
    }

    #[test]
    fn reversed_param_brackets_give_no_params() {
        let state = assert_compiles!("(defn f ] a [)");

        assert_eq!(params_of(&state, "f"), Vec::<&str>::new());
    }

    #[test]
    fn nameless_defn_is_missing_params() {
        let state = assert_diagnoses!("(defn)", DiagnosticKind::MissingParams);
        assert!(state.functions().is_empty());

        assert_diagnoses!("(defn )", DiagnosticKind::MissingParams);
    }

    /// The name is whatever token follows `defn`, even a bracket.
    #[test]
    fn token_after_defn_is_the_name() {
        let state = assert_compiles!("(defn [a])");

        assert_eq!(state.functions().len(), 1);
        assert_eq!(params_of(&state, "["), vec!["a"]);
    }

    #[test]
    fn empty_input_is_unbalanced() {
        assert_diagnoses!("", DiagnosticKind::UnbalancedParens);
        assert_diagnoses!("  \n ", DiagnosticKind::UnbalancedParens);
    }

    /// The balance check only looks at the last token.
    #[test]
    fn balance_check_is_last_token_only() {
        let state = assert_compiles!("((defn f [a]) ) )");
        assert!(state.functions().is_empty());

        assert_compiles!(")");
        assert_diagnoses!("(defn f [a]) x", DiagnosticKind::UnbalancedParens);
    }

    #[test]
    fn later_definition_overwrites_earlier() {
        let mut state = CompilationState::new();
        compile("(defn f [a])", &mut state);
        compile("(defn g [])", &mut state);
        compile("(defn f [b c])", &mut state);

        assert!(state.is_ok());
        assert_eq!(state.functions().len(), 2);
        assert_eq!(params_of(&state, "f"), vec!["b", "c"]);

        let names: Vec<&String> = state.functions().keys().collect();
        assert_eq!(names, vec!["f", "g"]);
    }

    #[test]
    fn diagnostic_is_replaced_by_next_call() {
        let mut state = CompilationState::new();

        compile("(defn one [", &mut state);
        assert_eq!(
            state.diagnostic().map(Diagnostic::kind),
            Some(DiagnosticKind::UnbalancedParens)
        );

        compile("(defn one )", &mut state);
        assert_eq!(
            state.diagnostic().map(Diagnostic::kind),
            Some(DiagnosticKind::MissingParams)
        );

        compile("(defn one [])", &mut state);
        assert!(state.is_ok());
        assert!(state.function("one").is_some());
    }

    #[test]
    fn failed_compile_keeps_earlier_functions() {
        let mut state = CompilationState::new();
        compile("(defn f [a])", &mut state);
        compile("(defn f", &mut state);

        assert!(!state.is_ok());
        assert_eq!(params_of(&state, "f"), vec!["a"]);
    }

    #[test]
    fn diagnostics_point_at_the_offending_token() {
        let mut state = CompilationState::new();

        compile("(defn one [", &mut state);
        let range = state.diagnostic().map(PositionalError::range);
        assert_eq!(range, Some(Span::new(Bytes::new(10), Bytes::new(11))));

        compile("(defn one )", &mut state);
        let range = state.diagnostic().map(PositionalError::range);
        assert_eq!(range, Some(Span::new(Bytes::new(6), Bytes::new(9))));
    }

    #[test]
    fn compile_tokens_matches_compile() {
        let tokens = lex("(defn f [a b])");
        let mut state = CompilationState::new();
        compile_tokens(&tokens, &mut state);

        assert_eq!(params_of(&state, "f"), vec!["a", "b"]);
    }
}
