//! Function specs and their examples.
//!
//! Both types are plain immutable values: built by the caller, read once by a generator.

use crate::value::Value;

/// One argument list / expected return pair.
///
/// ## Notes
/// - `arguments: None` and `Some(vec![])` are distinct values, but every generator treats both as "no
///   arguments".
/// - `returns` is optional only so that malformed input can be represented and rejected by
///   [`crate::validate`]. Generators assume it is present.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub arguments: Option<Vec<Value>>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "return", default, skip_serializing_if = "Option::is_none")
    )]
    pub returns: Option<Value>,
}

impl Example {
    /// An example with no arguments and the given expected return.
    pub fn new(returns: impl Into<Value>) -> Self {
        Self {
            arguments: None,
            returns: Some(returns.into()),
        }
    }

    /// Attach an argument list.
    pub fn with_arguments(mut self, arguments: Vec<Value>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// The arguments, or an empty slice when absent.
    pub fn arguments(&self) -> &[Value] {
        self.arguments.as_deref().unwrap_or(&[])
    }

    /// Whether there is at least one argument.
    pub fn has_arguments(&self) -> bool {
        !self.arguments().is_empty()
    }
}

/// A subject name plus its ordered examples.
///
/// ## Notes
/// - `examples: None` models a spec whose `examples` key is missing (or misspelled). Such a spec is invalid,
///   whereas `Some(vec![])` is valid and generates nothing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub subject: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub examples: Option<Vec<Example>>,
}

impl FunctionSpec {
    pub fn new(subject: impl Into<String>, examples: Vec<Example>) -> Self {
        Self {
            subject: subject.into(),
            examples: Some(examples),
        }
    }

    /// A spec with no `examples` at all (not even an empty list).
    pub fn without_examples(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            examples: None,
        }
    }

    /// The examples in input order, or an empty slice when absent.
    pub fn examples(&self) -> &[Example] {
        self.examples.as_deref().unwrap_or(&[])
    }

    /// Whether there is at least one example to generate.
    pub fn has_examples(&self) -> bool {
        !self.examples().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_new_has_no_arguments() {
        let example = Example::new(2);
        assert_eq!(example.arguments, None);
        assert_eq!(example.returns, Some(Value::Integer(2)));
        assert!(!example.has_arguments());
        assert!(example.arguments().is_empty());
    }

    #[test]
    fn test_example_empty_arguments_are_not_absent() {
        let example = Example::new(2).with_arguments(vec![]);
        assert_eq!(example.arguments, Some(vec![]));
        assert!(!example.has_arguments());
    }

    #[test]
    fn test_example_with_arguments_keeps_order() {
        let example = Example::new(5).with_arguments(vec![2.into(), 3.into()]);
        assert_eq!(example.arguments(), &[Value::Integer(2), Value::Integer(3)]);
        assert!(example.has_arguments());
    }

    #[test]
    fn test_spec_without_examples_is_distinct_from_empty() {
        let missing = FunctionSpec::without_examples("sumar");
        let empty = FunctionSpec::new("sumar", vec![]);
        assert_ne!(missing, empty);
        assert!(missing.examples().is_empty());
        assert!(empty.examples().is_empty());
        assert!(!missing.has_examples());
        assert!(!empty.has_examples());
    }
}
