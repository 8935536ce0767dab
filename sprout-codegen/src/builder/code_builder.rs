//! Code builder utility for generating properly indented code.

use super::Indent;

/// Mutable builder for emitting indented source text.
///
/// # Example
///
/// ```
/// use sprout_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder.push_block("public class Demo {", "}", |b| {
///     b.push_line("private Long id;");
/// });
///
/// assert_eq!(builder.build(), "public class Demo {\n    private Long id;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Java, XML).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Create a new CodeBuilder with 2-space indentation (YAML).
    pub fn yaml() -> Self {
        Self::new(Indent::YAML)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add each line of `lines` at the current indentation.
    pub fn push_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for line in lines {
            self.push_line(line);
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body produced by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_indent();
        f(self);
        self.push_dedent();
        self.push_line(close)
    }

    /// Add a single-line Javadoc comment (`/** text */`).
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
