//! Miette diagnostic wrapper for plural expression compile errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use plurex::{CompileError, LexError, ParseError};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into the expression source.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plural expression: {message}")]
#[diagnostic(code(plurex::syntax))]
pub struct PluralDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl PluralDiagnostic {
    /// Create a diagnostic from a CompileError.
    ///
    /// Offsets in the error must refer to `source` as given, so the caller
    /// compiles the raw text rather than its whitespace-free cache key.
    pub fn from_compile_error(name: &str, source: &str, err: &CompileError) -> Self {
        let span = match err {
            CompileError::Lex(e) => Some(e.span()),
            CompileError::Parse(e) => e.span(),
        };
        // Clamp to the source so miette never indexes past the end.
        let span = span.map(|(start, end)| {
            let start = start.min(source.len());
            let end = end.clamp(start, source.len());
            SourceSpan::from((start, end - start))
        });

        PluralDiagnostic {
            src: NamedSource::new(name, source.to_string()),
            span,
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

fn help_for(err: &CompileError) -> Option<String> {
    match err {
        CompileError::Lex(LexError::UnpairedOperator { expected, .. }) => {
            Some(format!("did you mean `{expected}`?"))
        }
        CompileError::Lex(LexError::UnexpectedChar { .. }) => Some(
            "expressions use `n`, decimal numbers, C operators and parentheses".to_string(),
        ),
        CompileError::Parse(ParseError::EmptyInput) => {
            Some("a plural expression looks like `n != 1`".to_string())
        }
        CompileError::Parse(
            ParseError::UnexpectedToken { .. }
            | ParseError::UnexpectedEnd { .. }
            | ParseError::TooDeep { .. },
        ) => None,
    }
}
