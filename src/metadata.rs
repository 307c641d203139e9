use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

/// Document metadata, keyed by the case-sensitive name before the colon.
pub type Metadata = BTreeMap<String, String>;

static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9\-_]+):\s*(.+)\s*$").expect("metadata pattern is valid")
});

/// Collect `key: value` lines from raw markdown.
///
/// Every line of the document is checked, including lines inside code blocks
/// and block quotes. A key seen more than once keeps its last value.
pub fn extract_metadata(markdown: &str) -> Metadata {
    info!("extracting metadata from markdown");
    let mut metadata = Metadata::new();

    for line in markdown.split('\n') {
        if let Some(caps) = METADATA_LINE.captures(line) {
            let key = caps[1].trim().to_string();
            let value = caps[2].trim().to_string();
            metadata.insert(key, value);
        }
    }

    debug!(?metadata, "metadata extracted");
    metadata
}
