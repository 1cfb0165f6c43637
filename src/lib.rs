#![forbid(unsafe_code)]
//! Test Generator
//!
//! Turns a language-neutral function spec (a subject name plus argument/return examples) into ready-to-run
//! test source for several target languages. The data model and validation live in [`tester_core`]; this
//! crate holds the per-language generators, the language registry, dispatch, and a thin CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Preconditions
//!
//! Generation is only defined for specs that pass [`tester_core::is_valid`]. Dispatch does not re-check;
//! see [`dispatch`].

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod generators;
pub mod language;
pub mod lines;
pub mod spec_file;
pub mod title;

pub use dispatch::{supports_grouped_examples, test_for, test_for_language};
pub use error::TesterError;
pub use generators::TestGenerator;
pub use language::Language;
pub use tester_core::{Example, FunctionSpec, Value, is_valid};
