//! Gobstones example descriptors.
//!
//! The output is a YAML-shaped document listing each example's title and raw expected return; no call
//! expression is emitted.

use tester_core::FunctionSpec;

use super::TestGenerator;
use crate::language::Language;
use crate::lines::TestLines;
use crate::title;

#[derive(Debug, Clone, Copy, Default)]
pub struct Gobstones;

impl TestGenerator for Gobstones {
    fn language(&self) -> Language {
        Language::Gobstones
    }

    fn supports_grouped_examples(&self) -> bool {
        false
    }

    fn write_test(&self, spec: &FunctionSpec, out: &mut TestLines) {
        let subject = &spec.subject;
        out.line(format!("subject: {subject}"));
        out.line("examples:");
        for example in spec.examples() {
            out.line(format!("- title: {}", self.sample_title(subject, example)));
            out.indent();
            out.line(format!("return: {}", title::render_return(example.returns.as_ref())));
            out.dedent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tester_core::Example;

    #[test]
    fn test_gobstones_single_example() {
        let spec = FunctionSpec::new("pared", vec![Example::new("Negro")]);
        assert_eq!(
            Gobstones.test_for(&spec),
            "subject: pared\nexamples:\n- title: pared() should return Negro\n  return: Negro"
        );
    }

    #[test]
    fn test_gobstones_title_uses_parenthesized_call() {
        let spec = FunctionSpec::new(
            "mover",
            vec![Example::new("True").with_arguments(vec!["Norte".into(), 2.into()])],
        );
        let out = Gobstones.test_for(&spec);
        assert!(out.contains("- title: mover(Norte, 2) should return True"));
        assert!(!out.contains("mover Norte"));
    }

    #[test]
    fn test_gobstones_emits_every_example_despite_capability_flag() {
        assert!(!Gobstones.supports_grouped_examples());
        let spec = FunctionSpec::new("f", vec![Example::new(1), Example::new(2), Example::new(3)]);
        let out = Gobstones.test_for(&spec);
        assert_eq!(out.matches("- title: ").count(), 3);
    }
}
