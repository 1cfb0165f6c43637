//! Mocha-style output with an `assertEqual(expected, actual)` helper.

use tester_core::FunctionSpec;

use super::TestGenerator;
use crate::language::Language;
use crate::lines::TestLines;
use crate::title;

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScript;

impl TestGenerator for JavaScript {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn write_test(&self, spec: &FunctionSpec, out: &mut TestLines) {
        let subject = &spec.subject;
        out.line(format!("describe(\"{subject}: \", function() {{"));
        out.indent();
        for example in spec.examples() {
            out.line(format!("it(\"{}\", function() {{", self.sample_title(subject, example)));
            out.indent();
            out.line(format!(
                "assertEqual({}, {});",
                title::render_return(example.returns.as_ref()),
                self.application_text(subject, example.arguments.as_deref())
            ));
            out.dedent();
            out.line("});");
        }
        out.dedent();
        out.line("});");
    }
}
