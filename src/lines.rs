//! Line buffer with indentation tracking.
//!
//! Generators push whole lines; [`TestLines::finish`] joins them with `\n`, with no trailing newline and no
//! blank lines between blocks.

/// Two spaces per level, the same for every target language.
const INDENT: &str = "  ";

/// Collects indented output lines.
#[derive(Debug, Default)]
pub struct TestLines {
    lines: Vec<String>,
    indent_level: usize,
}

impl TestLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Push one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let mut line = INDENT.repeat(self.indent_level);
        line.push_str(text.as_ref());
        self.lines.push(line);
    }

    /// Join every line with `\n`.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
