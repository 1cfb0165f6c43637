//! Well-formedness check run by callers before generation.
//!
//! A spec is valid iff `examples` is present (an empty list counts) and every example has a `return`.
//! Missing arguments never make a spec invalid.

use thiserror::Error;

use crate::spec::FunctionSpec;

/// The first problem that makes a spec unusable for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpecIssue {
    #[error("spec has no `examples` list")]
    MissingExamples,

    #[error("example #{index} has no `return` value")]
    MissingReturn { index: usize },
}

/// Check a spec, reporting the first issue found.
pub fn validate(spec: &FunctionSpec) -> Result<(), SpecIssue> {
    let examples = spec.examples.as_deref().ok_or(SpecIssue::MissingExamples)?;
    match examples.iter().position(|example| example.returns.is_none()) {
        Some(index) => Err(SpecIssue::MissingReturn { index }),
        None => Ok(()),
    }
}

/// Whether generation may be invoked on `spec`.
pub fn is_valid(spec: &FunctionSpec) -> bool {
    validate(spec).is_ok()
}
