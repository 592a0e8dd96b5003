/// HTML renderer for the document AST
use crate::ast::Node;

/// Renders a document with every block tag on its own line.
///
/// Paragraph lines are separated by `<br/>` on a line of its own. Text is
/// written as-is, without escaping.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    pub fn render(&self, node: &Node) -> String {
        render_node(node)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_children(node: &Node) -> String {
    node.children().iter().map(render_node).collect()
}

fn render_node(node: &Node) -> String {
    match node {
        Node::Document(_) => render_children(node),
        Node::Heading { level, .. } => {
            format!("<h{}>{}</h{}>\n", level, render_children(node), level)
        }
        Node::Paragraph(_) => format!("<p>\n{}\n</p>\n", render_children(node)),
        Node::UnorderedList(_) => format!("<ul>\n{}</ul>\n", render_children(node)),
        Node::OrderedList(_) => format!("<ol>\n{}</ol>\n", render_children(node)),
        Node::ListItem(_) => format!("<li>{}</li>\n", render_children(node)),
        Node::Text(text) => text.clone(),
        Node::Strong(_) => format!("<b>{}</b>", render_children(node)),
        Node::Emphasis(_) => format!("<em>{}</em>", render_children(node)),
        Node::LineBreak => "\n<br/>\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    #[test]
    fn test_paragraph_breaks_only_between_lines() {
        let para = Node::Paragraph(vec![text("a"), Node::LineBreak, text("b")]);
        assert_eq!(
            HtmlRenderer::new().render(&para),
            "<p>\na\n<br/>\nb\n</p>\n"
        );
    }

    #[test]
    fn test_list_items_one_per_line() {
        let list = Node::OrderedList(vec![
            Node::ListItem(vec![text("one")]),
            Node::ListItem(vec![Node::Strong(vec![text("two")])]),
        ]);
        assert_eq!(
            HtmlRenderer::new().render(&list),
            "<ol>\n<li>one</li>\n<li><b>two</b></li>\n</ol>\n"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(HtmlRenderer::new().render(&text("a < b & c")), "a < b & c");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(HtmlRenderer::new().render(&Node::Document(vec![])), "");
    }
}
