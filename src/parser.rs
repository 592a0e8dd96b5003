/// Line classifier and block state machine
use crate::ast::Node;
use crate::inline::parse_line;
use tracing::debug;

const MAX_HEADING_LEVEL: usize = 6;
const UNORDERED_MARKER: char = '-';
const ORDERED_MARKER: char = '*';

/// Block category of a single input line
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Heading { level: u8, text: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    Text(&'a str),
}

/// Classify one line (without its trailing newline)
pub fn classify_line(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    let hashes = count_leading(line, '#');
    if (1..=MAX_HEADING_LEVEL).contains(&hashes) {
        if let Some(text) = after_marker(line, hashes) {
            return Line::Heading {
                level: hashes as u8,
                text,
            };
        }
    }

    if count_leading(line, UNORDERED_MARKER) == 1 {
        if let Some(text) = after_marker(line, 1) {
            return Line::UnorderedItem(text);
        }
    }

    if count_leading(line, ORDERED_MARKER) == 1 {
        if let Some(text) = after_marker(line, 1) {
            return Line::OrderedItem(text);
        }
    }

    Line::Text(line.trim())
}

/// Count contiguous `marker` characters at the start of the line
fn count_leading(line: &str, marker: char) -> usize {
    line.chars().take_while(|&c| c == marker).count()
}

/// Content after a marker run, which must be followed by whitespace or end of line
fn after_marker(line: &str, marker_len: usize) -> Option<&str> {
    // Marker characters are ASCII so the byte offset equals the char count
    let rest = &line[marker_len..];
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

/// Currently open block, owning whatever it has collected so far
#[derive(Debug, Default)]
enum BlockState {
    #[default]
    None,
    UnorderedList(Vec<Node>),
    OrderedList(Vec<Node>),
    Paragraph(Vec<Node>),
}

impl BlockState {
    /// Turn the open block into its finished node, if any
    fn into_node(self) -> Option<Node> {
        match self {
            BlockState::None => None,
            BlockState::UnorderedList(items) => Some(Node::UnorderedList(items)),
            BlockState::OrderedList(items) => Some(Node::OrderedList(items)),
            BlockState::Paragraph(lines) => Some(Node::Paragraph(lines)),
        }
    }
}

/// Single-pass block emitter.
///
/// Feeds each classified line through a transition on [`BlockState`],
/// closing the previous block before a different one opens.
#[derive(Debug, Default)]
pub struct Parser {
    state: BlockState,
    blocks: Vec<Node>,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    /// Parse a whole document into a `Node::Document`
    pub fn parse(mut self, input: &str) -> Node {
        for line in input.lines() {
            self.feed(line);
        }
        self.finish()
    }

    /// Apply one line to the state machine
    pub fn feed(&mut self, line: &str) {
        let classified = classify_line(line);
        debug!(?classified, "classified line");

        match classified {
            Line::Heading { level, text } => {
                self.close_block();
                self.blocks.push(Node::Heading {
                    level,
                    children: parse_line(text),
                });
            }
            Line::UnorderedItem(text) => {
                if !matches!(self.state, BlockState::UnorderedList(_)) {
                    self.close_block();
                    self.state = BlockState::UnorderedList(Vec::new());
                }
                if let BlockState::UnorderedList(items) = &mut self.state {
                    items.push(Node::ListItem(parse_line(text)));
                }
            }
            Line::OrderedItem(text) => {
                if !matches!(self.state, BlockState::OrderedList(_)) {
                    self.close_block();
                    self.state = BlockState::OrderedList(Vec::new());
                }
                if let BlockState::OrderedList(items) = &mut self.state {
                    items.push(Node::ListItem(parse_line(text)));
                }
            }
            Line::Blank => self.close_block(),
            Line::Text(text) => {
                if let BlockState::Paragraph(lines) = &mut self.state {
                    lines.push(Node::LineBreak);
                    lines.extend(parse_line(text));
                } else {
                    self.close_block();
                    self.state = BlockState::Paragraph(parse_line(text));
                }
            }
        }
    }

    /// Close any block still open at end of input and return the document
    pub fn finish(mut self) -> Node {
        self.close_block();
        Node::Document(self.blocks)
    }

    fn close_block(&mut self) {
        if let Some(node) = std::mem::take(&mut self.state).into_node() {
            debug!(block = block_name(&node), "closed block");
            self.blocks.push(node);
        }
    }
}

fn block_name(node: &Node) -> &'static str {
    match node {
        Node::UnorderedList(_) => "ul",
        Node::OrderedList(_) => "ol",
        Node::Paragraph(_) => "p",
        _ => "other",
    }
}
