//! Page assembly with a Jinja-style template.
//!
//! The template sees `html_content`, `css_content` and `toc`, plus every
//! metadata key as a top-level variable. Reserved names always win: a
//! metadata key that collides with one of them is dropped.

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{AutoEscape, Environment, Value};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::fs::read_file;
use crate::metadata::Metadata;
use crate::toc::TocEntry;

pub const RESERVED_NAMES: [&str; 3] = ["html_content", "css_content", "toc"];

/// Named values available to one template render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    vars: BTreeMap<String, Value>,
}

impl RenderContext {
    pub fn new(
        html_content: &str,
        css_content: Option<&str>,
        toc: &[TocEntry],
        metadata: &Metadata,
    ) -> Self {
        let mut vars = BTreeMap::new();

        for (key, value) in metadata {
            if RESERVED_NAMES.contains(&key.as_str()) {
                warn!(key = %key, "metadata key shadows a reserved template variable; ignoring it");
                continue;
            }
            vars.insert(key.clone(), Value::from(value.as_str()));
        }

        vars.insert("html_content".to_string(), Value::from(html_content));
        vars.insert(
            "css_content".to_string(),
            css_content.map_or(Value::from(()), Value::from),
        );
        vars.insert("toc".to_string(), Value::from_serialize(toc));

        Self { vars }
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    // Body and stylesheet are already HTML/CSS and go in verbatim.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// Render template source text against `ctx`.
pub fn render_str(source: &str, ctx: &RenderContext) -> Result<String> {
    let env = environment();
    let template = env.template_from_str(source)?;
    Ok(template.render(&ctx.vars)?)
}

/// Load the template at `template_path` and render it against `ctx`.
///
/// A missing template is fatal ([`Error::MissingTemplate`]), unlike a
/// missing input document.
pub fn render_page(template_path: &Path, ctx: &RenderContext) -> Result<String> {
    info!(template = %template_path.display(), "applying HTML template");
    let source = read_file(template_path).map_err(|e| match e {
        Error::NotFound { path } => Error::MissingTemplate { path },
        other => other,
    })?;
    render_str(&source, ctx)
}
