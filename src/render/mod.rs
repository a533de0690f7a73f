//! Parse tree rendering
//!
//! Presentation only: a depth-first, pre-order walk that prints each node on its own line, indented
//! by depth and followed by its category tag when present. Nothing here affects parsing.

mod config;
mod writer;

pub use config::{OutputFormat, RenderConfig};
pub use writer::TreeWriter;

use proclang_syntax::ParseNode;

/// Render a tree according to `config.format`.
pub fn render(node: &ParseNode, config: &RenderConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Tree => Ok(render_tree(node, config)),
        OutputFormat::Json => render_json(node),
    }
}

/// Indented text form, e.g.
///
/// ```text
/// Program  [Program]
///   procedure  [WordsKey]
///   p  [Id]
/// ```
pub fn render_tree(node: &ParseNode, config: &RenderConfig) -> String {
    let mut writer = TreeWriter::new(config.clone());
    write_node(&mut writer, node);
    writer.finish()
}

fn write_node(writer: &mut TreeWriter, node: &ParseNode) {
    write_label(writer, node);
    writer.indent();
    for child in node.children() {
        write_node(writer, child);
    }
    writer.dedent();
}

/// Terminal tokens in source order, one `label  [Category]` line each, unindented.
pub fn render_tokens(node: &ParseNode, config: &RenderConfig) -> String {
    let mut writer = TreeWriter::new(config.clone());
    for leaf in node.terminals() {
        write_label(&mut writer, leaf);
    }
    writer.finish()
}

fn write_label(writer: &mut TreeWriter, node: &ParseNode) {
    match node.category() {
        Some(category) if writer.config().show_categories => {
            writer.line(&format!("{}  [{}]", node.label(), category))
        }
        _ => writer.line(node.label()),
    }
}

/// Pretty-printed JSON form.
pub fn render_json(node: &ParseNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "procedure p; begin x := 1; end";

    #[test]
    fn test_render_tree_default() {
        let tree = proclang_syntax::parse(SOURCE).unwrap();
        let out = render_tree(&tree, &RenderConfig::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Program  [Program]");
        assert_eq!(lines[1], "  procedure  [WordsKey]");
        assert!(lines.contains(&"  Descriptions"));
        assert!(lines.contains(&"    Op"));
        assert!(lines.contains(&"      x  [Id]"));
        assert_eq!(*lines.last().unwrap(), "  end  [WordsKey]");
        assert_eq!(lines.len(), tree.node_count());
    }

    #[test]
    fn test_render_tree_without_categories() {
        let tree = proclang_syntax::parse(SOURCE).unwrap();
        let config = RenderConfig::new().with_categories(false).with_indent_width(1);
        let out = render_tree(&tree, &config);
        assert!(!out.contains('['));
        assert!(out.contains("\n p\n"));
    }

    #[test]
    fn test_render_json() {
        let tree = proclang_syntax::parse(SOURCE).unwrap();
        let json = render(&tree, &RenderConfig::new().with_format(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["label"], "Program");
        assert_eq!(value["category"], "Program");
        assert_eq!(value["children"][4]["label"], "Descriptions");
        assert!(value["children"][4].get("children").is_none());
        assert!(value["children"][4].get("category").is_none());
        assert_eq!(value["children"][5]["children"][0]["children"][1]["category"], "Symbols_of_Operation");
    }

    #[test]
    fn test_render_tokens_label_then_category() {
        let tree = proclang_syntax::parse(SOURCE).unwrap();
        let out = render_tokens(&tree, &RenderConfig::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "procedure  [WordsKey]",
                "p  [Id]",
                ";  [Symbols_of_Separating]",
                "begin  [WordsKey]",
                "x  [Id]",
                ":=  [Symbols_of_Operation]",
                "1  [Const]",
                ";  [Symbols_of_Separating]",
                "end  [WordsKey]",
            ]
        );
    }

    #[test]
    fn test_render_tokens_without_categories() {
        let tree = proclang_syntax::parse(SOURCE).unwrap();
        let out = render_tokens(&tree, &RenderConfig::new().with_categories(false));
        assert_eq!(out, "procedure\np\n;\nbegin\nx\n:=\n1\n;\nend\n");
    }

    #[test]
    fn test_deepest_accepted_tree_renders() {
        let levels = proclang_syntax::parser::MAX_NESTING_DEPTH;
        let source = format!("procedure p; begin x := {}a{}; end", "(".repeat(levels), ")".repeat(levels));
        let tree = proclang_syntax::parse(&source).unwrap();
        let out = render_tree(&tree, &RenderConfig::default());
        assert_eq!(out.lines().count(), tree.node_count());
        assert!(render_json(&tree).is_ok());
        drop(tree);
    }
}
