//! Candidate extraction and warning emission for removed usages
//!
//! A candidate is derived from the surrounding tokens of one position:
//! the nearest preceding non-whitespace token decides whether the usage is
//! a static call, and for static calls the owning class is looked up
//! before the separator. Extraction failures are not errors; code under
//! analysis may be half-written, so a missing token simply means there is
//! nothing to report.

use typolift_core::{FileTokens, TokenKind};

use super::record::RemovalRecord;
use super::registry::RemovalRegistry;

/// Message template for every removed-usage warning.
pub const REMOVED_MESSAGE: &str =
    "Calls to removed code are not allowed; found %s. Removed in %s. %s. See: %s";

/// A usage extracted from one token position, consumed immediately by the
/// registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Short owning class name, when one is resolvable from the tokens.
    pub class_name: Option<String>,
    pub is_static: bool,
}

/// Derive a candidate usage from the token at `position`.
pub fn extract_candidate(file: &FileTokens, position: usize) -> Option<Candidate> {
    let name = file.token(position)?.content.clone();

    let mut is_static = false;
    let mut class_name = None;

    let previous = position
        .checked_sub(1)
        .and_then(|from| file.find_previous(&[TokenKind::Whitespace], from, true, true));

    if let Some(previous) = previous {
        is_static = file.token(previous).map(|token| token.kind) == Some(TokenKind::DoubleColon);
        if is_static {
            class_name = previous
                .checked_sub(1)
                .and_then(|from| file.find_previous(&[TokenKind::Identifier], from, false, true))
                .and_then(|found| file.token(found))
                .map(|token| token.content.clone());
        }
    }

    Some(Candidate {
        name,
        class_name,
        is_static,
    })
}

/// All removal records matching the candidate at `position`.
pub fn find_removed_usage<'r>(
    file: &FileTokens,
    position: usize,
    registry: &'r RemovalRegistry,
) -> Vec<&'r RemovalRecord> {
    match extract_candidate(file, position) {
        Some(candidate) => registry.find_matching(
            &candidate.name,
            candidate.class_name.as_deref(),
            candidate.is_static,
        ),
        None => Vec::new(),
    }
}

/// Emit one warning per matching record, never deduplicated: two matching
/// records mean two warnings, each identifying its own old usage.
pub fn report(file: &mut FileTokens, position: usize, removed: &[&RemovalRecord]) {
    for record in removed {
        file.add_warning(
            REMOVED_MESSAGE,
            position,
            &record.identifier,
            &[
                &record.old_usage,
                &record.version_removed,
                record.replacement_text(),
                &record.docs_url,
            ],
        );
    }
}
