/// AST node types for converted documents
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Document(Vec<Node>),
    // Block-level nodes
    Heading {
        level: u8,
        children: Vec<Node>,
    },
    Paragraph(Vec<Node>), // Source lines separated by LineBreak
    // List nodes
    UnorderedList(Vec<Node>), // Contains ListItem nodes
    OrderedList(Vec<Node>),   // Contains ListItem nodes
    ListItem(Vec<Node>),      // Inline content of a single line
    // Inline nodes
    Text(String),
    Strong(Vec<Node>),   // <b> tag
    Emphasis(Vec<Node>), // <em> tag
    LineBreak,           // <br/> between paragraph lines
}

impl Node {
    /// Child nodes of a container, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children)
            | Node::Heading { children, .. }
            | Node::Paragraph(children)
            | Node::UnorderedList(children)
            | Node::OrderedList(children)
            | Node::ListItem(children)
            | Node::Strong(children)
            | Node::Emphasis(children) => children,
            Node::Text(_) | Node::LineBreak => &[],
        }
    }
}
