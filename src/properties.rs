//! Property name calculation and metadata property emission.

use crate::connection::ScmConnection;
use crate::error::MetadataError;
use crate::inspector::RemoteMetadata;
use crate::notation::Notation;
use crate::remote_path::segment_at;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Computes final property names under prefixing and renaming rules.
///
/// A non-empty prefix is concatenated directly before the key; callers
/// wanting a `.`-separated namespace embed the trailing separator in the
/// prefix itself. The rename overlay is consulted once, after prefixing,
/// and its keys must therefore match the already-prefixed name.
pub struct PropertyNamer {
    prefix: String,
    rename: HashMap<String, String>,
}

impl PropertyNamer {
    #[must_use]
    pub fn new(prefix: &str, rename: HashMap<String, String>) -> Self {
        Self {
            prefix: prefix.to_string(),
            rename,
        }
    }

    #[must_use]
    pub fn name(&self, key: &str) -> String {
        let calculated = if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{key}", self.prefix)
        };

        match self.rename.get(&calculated) {
            Some(replacement) => replacement.clone(),
            None => calculated,
        }
    }
}

/// Render metadata into the final property mapping.
///
/// Emits `revision`, `revision.short`, `branch`, and `dirty` unconditionally,
/// then one property per selected notation per segment per addressing sign.
/// Every computed key passes through the namer before insertion; colliding
/// final names are last-write-wins, which lets a rename deliberately collapse
/// two computed keys onto one output name.
#[must_use]
pub fn build_properties(
    metadata: &RemoteMetadata,
    short_revision_length: usize,
    notations: &BTreeSet<Notation>,
    namer: &PropertyNamer,
) -> HashMap<String, String> {
    let mut out = HashMap::new();

    let short_revision: String = metadata
        .revision
        .chars()
        .take(short_revision_length)
        .collect();

    out.insert(namer.name("revision"), metadata.revision.clone());
    out.insert(namer.name("revision.short"), short_revision);
    out.insert(namer.name("branch"), metadata.branch.clone());
    out.insert(
        namer.name("dirty"),
        metadata.uncommitted_changes_present.to_string(),
    );

    let segments = &metadata.remote_path_segments;
    let count = segments.len() as isize;

    for notation in notations {
        let format_key: fn(isize) -> String = match notation {
            Notation::None => continue,
            Notation::Array => |index| format!("remote.path.segment[{index}]"),
            Notation::Property => |index| format!("remote.path.segment.{index}"),
        };

        for position in 0..count {
            // Each segment is addressable from the front and from the back;
            // both names resolve through the same indexing function.
            for index in [position, position - count] {
                if let Some(value) = segment_at(segments, index) {
                    out.insert(namer.name(&format_key(index)), value.to_string());
                }
            }
        }
    }

    out
}

/// Compute the full property mapping for a connection string and
/// inspector-provided metadata.
///
/// Validates the connection string, parses the notation configuration,
/// applies prefix and rename rules, and debug-logs the result in
/// deterministic order.
pub fn compute_properties(
    connection: &str,
    short_revision_length: usize,
    notation_csv: &str,
    prefix: &str,
    rename: &HashMap<String, String>,
    metadata: &RemoteMetadata,
) -> Result<HashMap<String, String>, MetadataError> {
    ScmConnection::parse(connection)?;

    let notations = Notation::parse_csv(notation_csv)?;
    let namer = PropertyNamer::new(prefix, rename.clone());
    let properties = build_properties(metadata, short_revision_length, &notations, &namer);

    for (key, value) in sorted_entries(&properties) {
        debug!("calculated {key}={value}");
    }

    Ok(properties)
}

/// Entries of a property mapping in case-insensitive lexicographic order,
/// with a byte-wise tie-break so the listing is fully deterministic.
#[must_use]
pub fn sorted_entries(properties: &HashMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = properties
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    entries.sort_by(|(a, _), (b, _)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    entries
}
