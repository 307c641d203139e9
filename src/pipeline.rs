//! One document in, one page out.
//!
//! Steps run strictly in order: read input, extract metadata, render
//! markdown, build the TOC, read CSS, apply the template, write output.
//! Any failure stops the run before the output file is touched.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::fs::{read_file, write_file};
use crate::metadata::{Metadata, extract_metadata};
use crate::template::{RenderContext, render_page};
use crate::markdown_to_annotated_html;
use crate::toc::TocEntry;

/// Template used when neither a flag nor the config file names one.
pub const DEFAULT_TEMPLATE: &str = "templates/default_template.html";

/// Paths given explicitly on the command line; they beat the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub css: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

/// Fully resolved settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub css: Option<PathBuf>,
    pub template: PathBuf,
}

impl Settings {
    /// Merge flag > config file > built-in default, per field.
    pub fn resolve(input: PathBuf, output: PathBuf, overrides: Overrides, config: Config) -> Self {
        let set = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());
        let css = set(overrides.css).or(config.css);
        let template = set(overrides.template)
            .or(config.template)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE));
        Self {
            input,
            output,
            css,
            template,
        }
    }
}

/// What a successful conversion produced.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub metadata: Metadata,
    pub toc: Vec<TocEntry>,
    pub page: String,
}

/// Run every step except writing the output file.
pub fn render(settings: &Settings) -> Result<Conversion> {
    let markdown = read_file(&settings.input)?;

    let metadata = extract_metadata(&markdown);
    let (toc, html) = markdown_to_annotated_html(&markdown);

    let css = settings.css.as_deref().map(read_file).transpose()?;

    let ctx = RenderContext::new(&html, css.as_deref(), &toc, &metadata);
    let page = render_page(&settings.template, &ctx)?;

    Ok(Conversion {
        metadata,
        toc,
        page,
    })
}

/// Convert `settings.input` and write the page to `settings.output`.
pub fn convert(settings: &Settings) -> Result<Conversion> {
    let conversion = render(settings)?;
    write_file(&settings.output, &conversion.page)?;
    info!("conversion successful");
    Ok(conversion)
}
