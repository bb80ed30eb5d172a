//! Registry of removed API surfaces, built from YAML configuration
//!
//! Configuration files map a source-version tag to removed identifiers:
//!
//! ```yaml
//! "7.0":
//!   TYPO3\CMS\Core\Utility\GeneralUtility::loadTCA:
//!     replacement: null
//!     docsUrl: "https://docs.typo3.org/..."
//! ```
//!
//! Files are merged in list order; a later file wins per identifier. The
//! registry is built once at startup and is read-only afterwards, so all
//! file I/O stays off the token-matching hot path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use typolift_core::{ConfigError, TokenKind};

use super::record::{split_identifier, RemovalRecord};

/// One configured removal as written in YAML. Sniff-specific extra fields
/// are tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRemoval {
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default, rename = "docsUrl")]
    pub docs_url: String,
}

type RawDocument = BTreeMap<String, BTreeMap<String, RawRemoval>>;

type Prepare = fn(&str, String, RawRemoval) -> (String, RemovalRecord);

/// In-memory index of removed identifiers.
///
/// At most one record exists per raw identifier key.
#[derive(Debug, Default)]
pub struct RemovalRegistry {
    records: BTreeMap<String, RemovalRecord>,
}

impl RemovalRegistry {
    /// Removed functions, methods and constants: keys are split on
    /// `::`/`->` into class and member name.
    pub fn php_usage(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_php_usage)
    }

    /// Removed classes: keys are class names, matched by short name.
    pub fn classnames(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_classname)
    }

    /// Removed hooks: keys are `path->hookName`.
    pub fn hooks(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_hook)
    }

    /// Removed globals, signals and TypoScript constants: keys are looked
    /// up verbatim.
    pub fn flat(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_flat)
    }

    /// Removed extensions: keys are case-folded extension keys.
    pub fn extensions(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_extension)
    }

    /// Removed TypoScript: a `new ` prefix marks an object constructor,
    /// anything else an object identifier.
    pub fn typoscript(files: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::build(files, prepare_typoscript)
    }

    fn build(files: &[PathBuf], prepare: Prepare) -> Result<Self, ConfigError> {
        let mut records = BTreeMap::new();
        for file in files {
            for (version, removals) in load_document(file)? {
                for (raw, config) in removals {
                    let (key, record) = prepare(&version, raw, config);
                    records.insert(key, record);
                }
            }
        }
        Ok(Self { records })
    }

    pub fn is_removed(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Look up a removal by raw identifier.
    ///
    /// Callers must check `is_removed` first; looking up an unknown
    /// identifier is a contract violation and fails hard.
    pub fn get_removed(&self, identifier: &str) -> Result<&RemovalRecord, ConfigError> {
        self.records
            .get(identifier)
            .ok_or_else(|| ConfigError::NotRemoved(identifier.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = &RemovalRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records matching a candidate usage.
    ///
    /// Static calls without a determinable owning class are never matched:
    /// reporting them would produce false positives whenever a short
    /// function name collides with a removed static method. Otherwise a
    /// record matches when name and static flag agree and either the class
    /// names agree or the candidate has no class context at all.
    pub fn find_matching(
        &self,
        name: &str,
        class_name: Option<&str>,
        is_static: bool,
    ) -> Vec<&RemovalRecord> {
        if is_static && class_name.is_none() {
            return Vec::new();
        }

        self.records
            .values()
            .filter(|record| {
                record.name == name
                    && record.is_static == is_static
                    && match class_name {
                        None => true,
                        Some(class) => record.class_name.as_deref() == Some(class),
                    }
            })
            .collect()
    }
}

fn load_document(path: &Path) -> Result<RawDocument, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty or null document is an empty mapping, not an error.
    let document: Option<RawDocument> =
        serde_yaml::from_str(&content).map_err(|error| ConfigError::InvalidYaml {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    Ok(document.unwrap_or_default())
}

fn prepare_php_usage(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    let split = split_identifier(&raw);

    let identifier = match &split.class_name {
        Some(class) => format!("{}.{}", class, split.name),
        None => split.name.clone(),
    };
    let old_usage = match &split.fqcn {
        Some(fqcn) => {
            let separator = if split.is_static { "::" } else { "->" };
            format!("{}{}{}", fqcn, separator, split.name)
        }
        None => split.name.clone(),
    };

    let record = RemovalRecord {
        raw_identifier: raw.clone(),
        name: split.name,
        class_name: split.class_name,
        fqcn: split.fqcn,
        is_static: split.is_static,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier,
        old_usage,
        ts_type: None,
    };
    (raw, record)
}

fn prepare_classname(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    let fqcn = raw.trim_start_matches('\\').to_string();
    let class_name = fqcn.rsplit('\\').next().unwrap_or(&fqcn).to_string();

    let record = RemovalRecord {
        raw_identifier: raw.clone(),
        name: class_name.clone(),
        class_name: Some(class_name),
        fqcn: Some(fqcn.clone()),
        is_static: false,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier: format!("RemovedClass.{}", fqcn.replace('\\', "_")),
        old_usage: raw.clone(),
        ts_type: None,
    };
    (raw, record)
}

fn prepare_hook(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    let split = split_identifier(&raw);
    let path = split.fqcn.clone().unwrap_or_else(|| raw.clone());

    let record = RemovalRecord {
        raw_identifier: raw.clone(),
        name: split.name.clone(),
        class_name: split.class_name,
        fqcn: Some(path.clone()),
        is_static: split.is_static,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier: format!("{}{}", path.replace('/', "-").replace('.', ""), split.name),
        old_usage: format!("[\"{}\"][\"{}\"] = ...", path, split.name),
        ts_type: None,
    };
    (raw, record)
}

fn prepare_flat(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    let record = RemovalRecord {
        raw_identifier: raw.clone(),
        name: raw.clone(),
        class_name: None,
        fqcn: None,
        is_static: false,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier: raw.clone(),
        old_usage: raw.clone(),
        ts_type: None,
    };
    (raw, record)
}

fn prepare_extension(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    let key = raw.trim_start_matches('\\').to_lowercase();
    let record = RemovalRecord {
        raw_identifier: raw.clone(),
        name: key.clone(),
        class_name: None,
        fqcn: None,
        is_static: false,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier: format!("RemovedExtension.{}", key),
        old_usage: raw,
        ts_type: None,
    };
    (key, record)
}

fn prepare_typoscript(version: &str, raw: String, config: RawRemoval) -> (String, RemovalRecord) {
    // A `new ` prefix marks a constructor: a content object or other object
    // assignment instead of a plain object path.
    let (name, ts_type) = match raw.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("new ") => {
            (raw[4..].to_string(), TokenKind::ObjectConstructor)
        }
        _ => (raw.clone(), TokenKind::ObjectIdentifier),
    };

    let record = RemovalRecord {
        raw_identifier: raw,
        name: name.clone(),
        class_name: None,
        fqcn: None,
        is_static: false,
        version_removed: version.to_string(),
        replacement: config.replacement,
        docs_url: config.docs_url,
        identifier: name.replace('.', "-"),
        old_usage: name.clone(),
        ts_type: Some(ts_type),
    };
    (name, record)
}
