use pulldown_cmark::{Options, Parser, html};
use tracing::info;

/// Parser options for page bodies.
///
/// Headings come out as bare `<hN>` tags; the TOC builder gives them ids.
/// Trailing `{...}` on a heading line stays part of the heading text.
fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render markdown text to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    info!("converting markdown to HTML");
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
