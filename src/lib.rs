/// A Markdown-subset to HTML converter
pub mod ast;
pub mod error;
pub mod inline;
pub mod parser;
pub mod renderer;

use std::fs;
use std::io;
use std::path::Path;

pub use error::{Error, Result};
use parser::Parser;
use renderer::HtmlRenderer;
use tracing::info;

/// Parse markdown text into a document tree
pub fn parse(markdown: &str) -> ast::Node {
    Parser::new().parse(markdown)
}

/// Parse markdown text and render to HTML
pub fn markdown_to_html(markdown: &str) -> String {
    let ast = parse(markdown);
    let renderer = HtmlRenderer::new();
    renderer.render(&ast)
}

/// Convert the markdown file at `input` and write the HTML to `output`.
///
/// The output file is created or overwritten. Nothing is written when the
/// input is missing or cannot be read.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let markdown = fs::read_to_string(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::MissingInput {
            path: input.to_path_buf(),
        },
        _ => Error::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let html = markdown_to_html(&markdown);

    fs::write(output, &html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = html.len(),
        "converted"
    );
    Ok(())
}
