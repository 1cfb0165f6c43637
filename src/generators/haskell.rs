//! Hspec output.
//!
//! ```text
//! describe "sumar: " $ do
//!   it "sumar 1 1 should return 2" $ do
//!     sumar 1 1 `shouldBe` 2
//! ```

use tester_core::{FunctionSpec, Value};

use super::TestGenerator;
use crate::language::Language;
use crate::lines::TestLines;
use crate::title;

/// Generator for Haskell (Hspec). Calls are curried: `sumar 1 1`, or the bare subject with no arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haskell;

impl TestGenerator for Haskell {
    fn language(&self) -> Language {
        Language::Haskell
    }

    fn application_text(&self, subject: &str, arguments: Option<&[Value]>) -> String {
        title::curried_application_text(subject, arguments)
    }

    fn write_test(&self, spec: &FunctionSpec, out: &mut TestLines) {
        let subject = &spec.subject;
        out.line(format!("describe \"{subject}: \" $ do"));
        out.indent();
        for example in spec.examples() {
            out.line(format!("it \"{}\" $ do", self.sample_title(subject, example)));
            out.indent();
            out.line(format!(
                "{} `shouldBe` {}",
                self.application_text(subject, example.arguments.as_deref()),
                title::render_return(example.returns.as_ref())
            ));
            out.dedent();
        }
        out.dedent();
    }
}
