//! Provide the example data model shared by every test generator: literal values, examples, function specs, and
//! the validity check that gates generation.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no generator-specific types.
//! - Values are opaque literal text. Nothing here interprets or type-checks a payload; rendering is pure text
//!   substitution.
//! - Serde support (for reading specs from JSON/YAML) is behind the optional `serde` feature.
//!
//! ## Examples
//! ```rust
//! use tester_core::{Example, FunctionSpec, Value, is_valid};
//!
//! let spec = FunctionSpec::new("sumar", vec![Example::new(2).with_arguments(vec![1.into(), 1.into()])]);
//! assert!(is_valid(&spec));
//! assert_eq!(Value::from(3.14).render(), "3.14");
//! ```

pub mod spec;
pub mod validate;
pub mod value;

pub use spec::{Example, FunctionSpec};
pub use validate::{SpecIssue, is_valid, validate};
pub use value::Value;
