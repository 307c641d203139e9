use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::info;

/// A table-of-contents entry linking to one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
}

// One alternative per level so the closing tag always matches the opening one.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = (1..=6).map(|n| format!("<h{n}>(.*?)</h{n}>")).collect();
    Regex::new(&alternatives.join("|")).expect("heading pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derive an anchor from heading text: lowercase, whitespace runs become `-`.
///
/// Punctuation and inline markup are kept as they are.
pub fn anchor_for(title: &str) -> String {
    WHITESPACE.replace_all(&title.to_lowercase(), "-").into_owned()
}

/// Give every bare `<h1>`..`<h6>` heading an `id` and list them in document order.
///
/// Headings that already carry attributes are left alone. Identical headings
/// at the same level share one anchor and appear once per occurrence.
pub fn annotate_headings(html: &str) -> (Vec<TocEntry>, String) {
    info!("generating table of contents");
    let mut toc = Vec::new();
    let mut annotated = html.to_string();

    for caps in HEADING.captures_iter(html) {
        // Exactly one of the six level groups participates in a match.
        let Some((level, title)) = (1..=6)
            .find_map(|n| caps.get(n).map(|m| (n, m.as_str())))
        else {
            continue;
        };
        let anchor = anchor_for(title);

        annotated = annotated.replace(
            &format!("<h{level}>{title}</h{level}>"),
            &format!("<h{level} id=\"{anchor}\">{title}</h{level}>"),
        );
        toc.push(TocEntry {
            title: title.to_string(),
            anchor,
        });
    }

    (toc, annotated)
}
