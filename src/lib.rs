mod config;
mod error;
mod fs;
pub mod logging;
mod markdown;
mod metadata;
mod pipeline;
mod template;
mod toc;

pub use config::Config;
pub use error::{Error, Result};
pub use fs::{read_file, write_file};
pub use markdown::markdown_to_html;
pub use metadata::{Metadata, extract_metadata};
pub use pipeline::{Conversion, DEFAULT_TEMPLATE, Overrides, Settings, convert, render};
pub use template::{RESERVED_NAMES, RenderContext, render_page, render_str};
pub use toc::{TocEntry, anchor_for, annotate_headings};

/// Convert markdown to an annotated HTML fragment and its table of contents.
pub fn markdown_to_annotated_html(markdown: &str) -> (Vec<TocEntry>, String) {
    annotate_headings(&markdown_to_html(markdown))
}
