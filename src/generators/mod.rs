//! Per-language test generators.
//!
//! Every generator follows the same skeleton: a header derived from the subject, one block per example in
//! input order, an optional footer. Lines are collected in a [`TestLines`] buffer and joined with `\n`.
//!
//! ## Overriding
//!
//! [`TestGenerator`] supplies the shared title/application rules as default methods. A generator overrides
//! only the piece its target language needs:
//!
//! | Generator    | `application_text`       | `supports_grouped_examples` |
//! |--------------|--------------------------|-----------------------------|
//! | [`Haskell`]    | curried (`f 1 2`)        | `true`                      |
//! | [`JavaScript`] | default (`f(1, 2)`)      | `true`                      |
//! | [`Gobstones`]  | default (`f(1, 2)`)      | `false`                     |
//!
//! ## Preconditions
//!
//! Generators do not validate their input. Callers check
//! [`tester_core::is_valid`] first; a missing `return` renders as empty text.

mod gobstones;
mod haskell;
mod javascript;

pub use gobstones::Gobstones;
pub use haskell::Haskell;
pub use javascript::JavaScript;

use tester_core::{Example, FunctionSpec, Value};

use crate::language::Language;
use crate::lines::TestLines;
use crate::title;

/// Shared contract for every target-language generator.
pub trait TestGenerator: Sync {
    /// The language tag this generator is registered under.
    fn language(&self) -> Language;

    /// Emit every line of the test document for `spec`.
    fn write_test(&self, spec: &FunctionSpec, out: &mut TestLines);

    /// Whether the target test format can hold several examples for one subject.
    ///
    /// This is a declared capability for callers deciding how to batch specs upstream. It does not change
    /// this generator's own output: every example is always emitted.
    fn supports_grouped_examples(&self) -> bool {
        true
    }

    /// Call-expression text for `subject` applied to `arguments`.
    fn application_text(&self, subject: &str, arguments: Option<&[Value]>) -> String {
        title::application_text(subject, arguments)
    }

    /// Human-readable test name for one example.
    fn sample_title(&self, subject: &str, example: &Example) -> String {
        let application = self.application_text(subject, example.arguments.as_deref());
        title::sample_title(&application, example.returns.as_ref())
    }

    /// Render the full test document.
    fn test_for(&self, spec: &FunctionSpec) -> String {
        let mut out = TestLines::new();
        self.write_test(spec, &mut out);
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal generator relying on every default.
    struct Plain;

    impl TestGenerator for Plain {
        fn language(&self) -> Language {
            Language::JavaScript
        }

        fn write_test(&self, spec: &FunctionSpec, out: &mut TestLines) {
            for example in spec.examples() {
                out.line(self.sample_title(&spec.subject, example));
            }
        }
    }

    #[test]
    fn test_default_capability_is_grouped() {
        assert!(Plain.supports_grouped_examples());
    }

    #[test]
    fn test_default_application_is_parenthesized() {
        let args = [Value::Integer(1), Value::Integer(2)];
        assert_eq!(Plain.application_text("sumar", Some(&args[..])), "sumar(1, 2)");
        assert_eq!(Plain.application_text("pared", None), "pared()");
    }

    #[test]
    fn test_default_test_for_joins_lines() {
        let spec = FunctionSpec::new("f", vec![Example::new(1), Example::new(2)]);
        assert_eq!(Plain.test_for(&spec), "f() should return 1\nf() should return 2");
    }
}
