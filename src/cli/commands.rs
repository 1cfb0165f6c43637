//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use tester_core::FunctionSpec;

use crate::dispatch;
use crate::language::{LANGUAGES, Language};
use crate::spec_file;

use super::{CliError, CliResult, ExitCode};

/// Load a spec file, mapping load errors to a CLI failure.
fn load(path: &Path) -> CliResult<FunctionSpec> {
    spec_file::load_spec(path).map_err(|e| CliError::failure(format!("Error loading {}: {}", path.display(), e)))
}

/// Generate a test document and print it (or write it to `output`).
pub fn generate(language_id: &str, spec_path: &Path, output: Option<&Path>) -> CliResult<ExitCode> {
    let language: Language = language_id.parse().map_err(|e| CliError::usage(format!("Error: {e}")))?;
    let spec = load(spec_path)?;

    // Generation assumes a well-formed spec; reject malformed ones here.
    tester_core::validate(&spec)
        .map_err(|issue| CliError::failure(format!("Invalid spec {}: {}", spec_path.display(), issue)))?;

    let code = dispatch::test_for_language(language, &spec);
    match output {
        Some(path) => {
            fs::write(path, &code)
                .map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), %language, "wrote generated tests");
        }
        None => println!("{code}"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Report whether a spec file is well-formed.
pub fn check(spec_path: &Path) -> CliResult<ExitCode> {
    let spec = load(spec_path)?;
    match tester_core::validate(&spec) {
        Ok(()) => {
            println!("{}: ok ({} examples)", spec_path.display(), spec.examples().len());
            Ok(ExitCode::SUCCESS)
        }
        Err(issue) => Err(CliError::failure(format!("{}: {}", spec_path.display(), issue))),
    }
}

/// Print every supported language token with its capability flag.
pub fn list_languages() -> CliResult<ExitCode> {
    for line in language_listing() {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn language_listing() -> Vec<String> {
    LANGUAGES
        .iter()
        .map(|info| {
            let grouped = if info.id.generator().supports_grouped_examples() {
                "grouped examples"
            } else {
                "one example per document"
            };
            format!("{:<12} {:<12} {}", info.canonical, info.display_name, grouped)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_spec(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tester_cmd_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_language_listing_covers_registry() {
        let listing = language_listing();
        assert_eq!(listing.len(), crate::language::known_tokens().len());
        assert!(listing[0].starts_with("haskell"));
        assert!(listing[2].starts_with("gobstones"));
        assert!(listing[2].ends_with("one example per document"));
    }

    #[test]
    fn test_generate_unknown_language_is_usage_error() {
        let err = generate("cobol", Path::new("missing.yaml"), None).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert!(err.message.contains("unknown language `cobol`"));
    }

    #[test]
    fn test_generate_rejects_invalid_spec() {
        let path = temp_spec("invalid.yaml", "subject: sumar\nexamples:\n- arguments: [1, 2]\n");
        let result = generate("haskell", &path, None);
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("example #0 has no `return` value"));
    }

    #[test]
    fn test_generate_writes_output_file() {
        let spec = temp_spec("pared.yaml", "subject: pared\nexamples:\n- return: Negro\n");
        let out = std::env::temp_dir().join(format!("tester_cmd_{}_pared.out", std::process::id()));
        let result = generate("gobstones", &spec, Some(&out));
        let written = fs::read_to_string(&out);
        let _ = fs::remove_file(&spec);
        let _ = fs::remove_file(&out);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
        assert_eq!(
            written.unwrap(),
            "subject: pared\nexamples:\n- title: pared() should return Negro\n  return: Negro"
        );
    }

    #[test]
    fn test_check_reports_missing_examples() {
        let path = temp_spec("misspelled.json", r#"{"subject": "sumar", "example": []}"#);
        let result = check(&path);
        let _ = fs::remove_file(&path);
        assert!(result.unwrap_err().message.contains("no `examples` list"));
    }
}
