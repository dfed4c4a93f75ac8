//! Code builder utility for generating properly indented Go code.

/// One level of Go indentation.
const INDENT: &str = "\t";

/// Fluent API for building code with tab indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use geng_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block_with_close("type BarInterface interface {", "}", |b| {
///         b.line("Doit(x int) error")
///     })
///     .build();
///
/// assert_eq!(code, "type BarInterface interface {\n\tDoit(x int) error\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use geng_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("type BarInterface interface {")
///     .push_indent()
///     .push_line("Doit()")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new empty CodeBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let mut builder = f(self.line(header).indent_once());
        builder.push_dedent();
        builder.line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn indent_once(mut self) -> Self {
        self.push_indent();
        self
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
