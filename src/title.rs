//! Call-expression and test-title text shared by the generators.
//!
//! [`application_text`] is the default (parenthesized) call form. Generators whose target language calls
//! functions differently substitute their own rule through
//! [`TestGenerator::application_text`](crate::generators::TestGenerator::application_text); the title shape
//! itself never changes.

use tester_core::Value;

/// Parenthesized call form: `subject()` or `subject(a, b)`.
///
/// Absent and empty argument lists render the same.
pub fn application_text(subject: &str, arguments: Option<&[Value]>) -> String {
    match arguments {
        Some(args) if !args.is_empty() => format!("{subject}({})", join_values(args, ", ")),
        _ => format!("{subject}()"),
    }
}

/// Curried call form: `subject` or `subject a b`.
pub fn curried_application_text(subject: &str, arguments: Option<&[Value]>) -> String {
    match arguments {
        Some(args) if !args.is_empty() => format!("{subject} {}", join_values(args, " ")),
        _ => subject.to_string(),
    }
}

/// `"<application> should return <returns>"`.
///
/// A missing return renders as empty text; see [`crate::dispatch`] for that precondition.
pub fn sample_title(application: &str, returns: Option<&Value>) -> String {
    format!("{application} should return {}", render_return(returns))
}

/// Literal text of an example's expected return.
pub fn render_return(returns: Option<&Value>) -> String {
    returns.map(Value::render).unwrap_or_default()
}

fn join_values(values: &[Value], separator: &str) -> String {
    values.iter().map(Value::render).collect::<Vec<_>>().join(separator)
}
