//! Removal records and identifier normalization

use typolift_core::TokenKind;

/// Replacement text reported when a removal has no configured replacement.
pub const NO_REPLACEMENT: &str = "There is no replacement, just remove call";

/// Metadata describing one removed API surface.
#[derive(Debug, Clone)]
pub struct RemovalRecord {
    /// The configuration key this record was loaded under.
    pub raw_identifier: String,
    /// Bare method/function/constant/global name.
    pub name: String,
    /// Short owning class name, last namespace segment.
    pub class_name: Option<String>,
    pub fqcn: Option<String>,
    pub is_static: bool,
    pub version_removed: String,
    pub replacement: Option<String>,
    pub docs_url: String,
    /// Identifier for configuring this specific warning in the host.
    pub identifier: String,
    /// Reconstructed usage string shown to the user, so multiple classes
    /// providing the same member name can be told apart.
    pub old_usage: String,
    /// Token kind a TypoScript record applies to.
    pub ts_type: Option<TokenKind>,
}

impl RemovalRecord {
    pub fn replacement_text(&self) -> &str {
        self.replacement.as_deref().unwrap_or(NO_REPLACEMENT)
    }
}

/// Structured fields of a raw removed-identifier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIdentifier {
    pub name: String,
    pub class_name: Option<String>,
    pub fqcn: Option<String>,
    pub is_static: bool,
}

/// Split a raw identifier on the first `::` (static) or `->` (instance)
/// separator.
///
/// The registry and the resolver both rely on this exact contract: the
/// left part is the fully-qualified class name, its short name is the last
/// namespace segment, the right part is the member name. Without a
/// separator the identifier is a bare function/constant/global name.
pub fn split_identifier(raw: &str) -> SplitIdentifier {
    let static_position = raw.find("::");
    let instance_position = raw.find("->");

    let separator = match (static_position, instance_position) {
        (Some(s), Some(i)) if s < i => Some((s, true)),
        (Some(_), Some(i)) => Some((i, false)),
        (Some(s), None) => Some((s, true)),
        (None, Some(i)) => Some((i, false)),
        (None, None) => None,
    };

    match separator {
        None => SplitIdentifier {
            name: raw.to_string(),
            class_name: None,
            fqcn: None,
            is_static: false,
        },
        Some((position, is_static)) => {
            let fqcn = &raw[..position];
            let name = &raw[position + 2..];
            let class_name = fqcn.rsplit('\\').next().unwrap_or(fqcn);
            SplitIdentifier {
                name: name.to_string(),
                class_name: Some(class_name.to_string()),
                fqcn: Some(fqcn.to_string()),
                is_static,
            }
        }
    }
}
