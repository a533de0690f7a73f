//! Rendering configuration for parse trees

/// Output format for a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One node per line, indented by depth.
    #[default]
    Tree,
    /// Pretty-printed JSON.
    Json,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of spaces per tree level
    pub indent_width: usize,
    /// Whether to print `  [Category]` after tagged nodes
    pub show_categories: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_categories: true,
            format: OutputFormat::Tree,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Show or hide category tags
    pub fn with_categories(mut self, show: bool) -> Self {
        self.show_categories = show;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
