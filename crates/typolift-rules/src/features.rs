//! Cross-cutting features attached to classname sniffs via configuration
//!
//! Feature configuration maps a feature name to the sniffs it runs for:
//!
//! ```yaml
//! legacyClassname:
//!   - Classname.StaticCall
//!   - Classname.Use
//! removedExtension:
//!   - Classname.Use
//! ```
//!
//! Features are a closed set of known capabilities. An unknown name in the
//! configuration fails startup immediately: silently skipping it would
//! hide a ruleset misconfiguration from the user.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use typolift_core::{ConfigError, FileTokens, TokenKind};

use crate::registry::SniffContext;
use crate::removed::resolver::REMOVED_MESSAGE;

/// A known cross-cutting capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Flag and rewrite legacy classnames using the shared mapping.
    LegacyClassname,
    /// Warn when a classname belongs to a removed extension.
    RemovedExtension,
}

impl FeatureKind {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "legacyClassname" => Ok(Self::LegacyClassname),
            "removedExtension" => Ok(Self::RemovedExtension),
            _ => Err(ConfigError::UnknownFeature(name.to_string())),
        }
    }

    fn process(
        self,
        file: &mut FileTokens,
        position: usize,
        content: &str,
        context: &mut SniffContext,
        force_empty_prefix: bool,
    ) {
        match self {
            Self::LegacyClassname => {
                legacy_classname(file, position, content, context, force_empty_prefix)
            }
            Self::RemovedExtension => removed_extension(file, position, content, context),
        }
    }
}

/// Validated feature-to-sniff assignments for a whole run.
#[derive(Debug, Default)]
pub struct FeatureConfiguration {
    assignments: Vec<(FeatureKind, Vec<String>)>,
}

impl FeatureConfiguration {
    /// Load and validate feature configuration; later files win per
    /// feature name.
    pub fn load(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for file in files {
            for (name, sniffs) in load_document(file)? {
                merged.insert(name, sniffs);
            }
        }

        let mut assignments = Vec::with_capacity(merged.len());
        for (name, sniffs) in merged {
            assignments.push((FeatureKind::from_name(&name)?, sniffs));
        }
        Ok(Self { assignments })
    }

    /// The features configured for one sniff.
    pub fn for_sniff(&self, sniff_name: &str) -> FeatureSet {
        let features = self
            .assignments
            .iter()
            .filter(|(_, sniffs)| sniffs.iter().any(|name| name == sniff_name))
            .map(|(feature, _)| *feature)
            .collect();
        FeatureSet { features }
    }
}

/// The features one sniff dispatches detected classnames to.
#[derive(Debug, Default)]
pub struct FeatureSet {
    features: Vec<FeatureKind>,
}

impl FeatureSet {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Run every configured feature against the classname found at
    /// `position`.
    pub fn process(
        &self,
        file: &mut FileTokens,
        position: usize,
        content: &str,
        context: &mut SniffContext,
    ) {
        self.process_with_prefix(file, position, content, context, false);
    }

    /// Like `process`, but suppresses the leading `\` on rewrites, for
    /// sites where a qualifier is not allowed (e.g. `use` imports).
    pub fn process_with_prefix(
        &self,
        file: &mut FileTokens,
        position: usize,
        content: &str,
        context: &mut SniffContext,
        force_empty_prefix: bool,
    ) {
        for feature in &self.features {
            feature.process(file, position, content, context, force_empty_prefix);
        }
    }
}

fn load_document(path: &Path) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Option<BTreeMap<String, Vec<String>>> =
        serde_yaml::from_str(&content).map_err(|error| ConfigError::InvalidYaml {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    Ok(document.unwrap_or_default())
}

fn legacy_classname(
    file: &mut FileTokens,
    position: usize,
    content: &str,
    context: &mut SniffContext,
    force_empty_prefix: bool,
) {
    // Remove leading/trailing separators and quotes.
    let classname = content.trim_matches(|c| c == '\\' || c == '\'' || c == '"');
    if classname.is_empty() {
        return;
    }

    add_maybe_warning(file, position, classname, context);

    if !context.mapping.is_legacy_classname(classname) {
        return;
    }
    let new_classname = match context.mapping.get_new_classname(classname) {
        Ok(name) => name.to_string(),
        Err(_) => return,
    };

    let fix = file.add_fixable_error(
        "Legacy classes are not allowed; found \"%s\", use \"%s\" instead",
        position,
        "legacyClassname",
        &[classname, &new_classname],
    );
    if fix {
        replace_legacy_classname(file, position, classname, &new_classname, force_empty_prefix);
    }
}

/// Warn about unmapped names that look legacy: `Tx_` names of extensions
/// known to have shipped legacy classes.
fn add_maybe_warning(
    file: &mut FileTokens,
    position: usize,
    classname: &str,
    context: &SniffContext,
) {
    if context.mapping.is_legacy_classname(classname)
        || !is_maybe_legacy_classname(classname, context)
    {
        return;
    }

    file.add_warning(
        "Legacy classes are not allowed; found %s that might be a legacy class that does not exist anymore",
        position,
        "mightBeLegacyClassname",
        &[classname],
    );
}

fn is_maybe_legacy_classname(classname: &str, context: &SniffContext) -> bool {
    if !classname.contains("Tx_") {
        return false;
    }
    let extension_name = classname.split('_').nth(1).unwrap_or("");
    context
        .options
        .legacy_extensions
        .iter()
        .any(|extension| extension == extension_name)
}

fn replace_legacy_classname(
    file: &mut FileTokens,
    position: usize,
    classname: &str,
    new_classname: &str,
    force_empty_prefix: bool,
) {
    let preceded_by_separator = position
        .checked_sub(1)
        .and_then(|previous| file.token(previous))
        .map(|token| token.kind)
        == Some(TokenKind::Backslash);
    let prefix = if force_empty_prefix || preceded_by_separator {
        ""
    } else {
        "\\"
    };

    let original = match file.token(position) {
        Some(token) => token.content.clone(),
        None => return,
    };
    let mut replacement = original.replace(classname, &format!("{}{}", prefix, new_classname));

    // Double-quoted strings become single quotes, so backslashes in the
    // new name need no escaping.
    if replacement.len() >= 2 && replacement.starts_with('"') && replacement.ends_with('"') {
        replacement = format!("'{}'", &replacement[1..replacement.len() - 1]);
    }

    file.fixer_mut().replace_token(position, replacement);
}

fn removed_extension(
    file: &mut FileTokens,
    position: usize,
    content: &str,
    context: &mut SniffContext,
) {
    let classname = content.trim_matches(|c| c == '\\' || c == '\'' || c == '"');

    for part in classname.split(|c| c == '\\' || c == '_') {
        if part.is_empty() {
            continue;
        }
        let key = part.to_lowercase();
        if !context.removed_extensions.is_removed(&key) {
            continue;
        }
        if let Ok(record) = context.removed_extensions.get_removed(&key) {
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
        break;
    }
}
