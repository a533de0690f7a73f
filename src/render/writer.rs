//! Output writer with indentation tracking

use super::config::RenderConfig;

/// Writer that tracks the current tree depth and builds the rendered output
pub struct TreeWriter {
    /// The output buffer
    output: String,
    /// Current depth
    indent_level: usize,
    /// Configuration
    config: RenderConfig,
}

impl TreeWriter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Write one indented line.
    pub fn line(&mut self, text: &str) {
        let indent = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', indent));
        self.output.push_str(text);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        let writer = TreeWriter::new(RenderConfig::default());
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_lines_follow_indent_level() {
        let mut writer = TreeWriter::new(RenderConfig::new().with_indent_width(3));
        writer.line("a");
        writer.indent();
        writer.line("b");
        writer.dedent();
        writer.dedent();
        writer.line("c");
        assert_eq!(writer.finish(), "a\n   b\nc\n");
    }
}
