//! Generation entry points.
//!
//! ## Preconditions
//!
//! Callers must check [`tester_core::is_valid`] before generating. Dispatch does not reject invalid specs:
//! one that reaches it is logged at `warn` and generated anyway, with missing returns rendered as empty
//! text. That output is unspecified and must not be relied on.

use tester_core::FunctionSpec;

use crate::error::TesterError;
use crate::language::Language;

/// Generate the test document for `spec` in the language named by `language_id`.
///
/// A spec without examples yields `""` before the token is even resolved. An unknown token is an error and
/// produces no output.
///
/// ## Examples
/// ```rust
/// use tester::dispatch::test_for;
/// use tester_core::{Example, FunctionSpec};
///
/// let spec = FunctionSpec::new("pared", vec![Example::new("Negro")]);
/// let out = test_for("gobstones", &spec).unwrap();
/// assert_eq!(out, "subject: pared\nexamples:\n- title: pared() should return Negro\n  return: Negro");
///
/// assert_eq!(test_for("gobstones", &FunctionSpec::new("", vec![])).unwrap(), "");
/// ```
#[tracing::instrument(skip_all, fields(language = language_id, subject = %spec.subject, examples = spec.examples().len()))]
pub fn test_for(language_id: &str, spec: &FunctionSpec) -> Result<String, TesterError> {
    if !spec.has_examples() {
        tracing::debug!("no examples; nothing to generate");
        return Ok(String::new());
    }
    let language: Language = language_id.parse()?;
    Ok(generate(language, spec))
}

/// Same as [`test_for`], for callers that already hold a resolved [`Language`].
pub fn test_for_language(language: Language, spec: &FunctionSpec) -> String {
    if !spec.has_examples() {
        return String::new();
    }
    generate(language, spec)
}

/// Capability query for the generator named by `language_id`.
pub fn supports_grouped_examples(language_id: &str) -> Result<bool, TesterError> {
    let language: Language = language_id.parse()?;
    Ok(language.generator().supports_grouped_examples())
}

fn generate(language: Language, spec: &FunctionSpec) -> String {
    if let Err(issue) = tester_core::validate(spec) {
        tracing::warn!(%language, %issue, "generating from an invalid spec; output is unspecified");
    }
    language.generator().test_for(spec)
}
