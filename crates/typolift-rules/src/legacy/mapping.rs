//! Legacy classname mapping store
//!
//! Maps old flat/underscore classnames to their namespaced replacements.
//! Two sources exist: the framework-provided mapping shipped with the
//! configuration (read-only) and the project mapping (read-write, grows as
//! legacy class definitions are discovered and rewritten during a fix
//! pass). The store is opened explicitly by its owner and flushed by the
//! same owner; there is no global instance.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use typolift_core::ConfigError;

#[derive(Debug, Clone)]
struct MappingEntry {
    /// The legacy classname as written in the mapping source.
    original: String,
    new_name: String,
}

/// Case-folded legacy-to-namespaced classname mapping with explicit
/// open/flush lifecycle.
#[derive(Debug)]
pub struct LegacyClassnameMapping {
    /// Keyed by lowercased legacy name. Framework entries win over project
    /// entries with the same key.
    framework: BTreeMap<String, MappingEntry>,
    project: BTreeMap<String, MappingEntry>,
    project_file: PathBuf,
    dirty: bool,
}

impl LegacyClassnameMapping {
    /// Open the store: the framework mapping must load when given, a
    /// missing project file simply means no discoveries yet.
    pub fn open(
        framework_file: Option<&Path>,
        project_file: &Path,
    ) -> Result<Self, ConfigError> {
        let framework = match framework_file {
            Some(path) => load_mapping_file(path)?,
            None => BTreeMap::new(),
        };
        let project = if project_file.is_file() {
            load_mapping_file(project_file)?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            framework,
            project,
            project_file: project_file.to_path_buf(),
            dirty: false,
        })
    }

    /// Whether a mapping exists for the given classname, case-insensitive.
    pub fn is_legacy_classname(&self, classname: &str) -> bool {
        let key = classname.to_lowercase();
        self.framework.contains_key(&key) || self.project.contains_key(&key)
    }

    /// Case-preserving variant for sites where the legacy name must match
    /// the mapping source exactly (e.g. doc-comment strings).
    pub fn is_legacy_classname_exact(&self, classname: &str) -> bool {
        let key = classname.to_lowercase();
        self.framework
            .get(&key)
            .or_else(|| self.project.get(&key))
            .map(|entry| entry.original == classname)
            .unwrap_or(false)
    }

    /// The namespaced replacement for a legacy classname.
    ///
    /// Callers must check `is_legacy_classname` first; asking for an
    /// unmapped name is a contract violation and fails hard.
    pub fn get_new_classname(&self, classname: &str) -> Result<&str, ConfigError> {
        let key = classname.to_lowercase();
        self.framework
            .get(&key)
            .or_else(|| self.project.get(&key))
            .map(|entry| entry.new_name.as_str())
            .ok_or_else(|| ConfigError::NotLegacy(classname.to_string()))
    }

    /// Record a mapping discovered at runtime, e.g. when a namespace-less
    /// class definition was rewritten.
    pub fn add_legacy_classname(&mut self, legacy: &str, new_name: &str) {
        self.project.insert(
            legacy.to_lowercase(),
            MappingEntry {
                original: legacy.to_string(),
                new_name: new_name.to_string(),
            },
        );
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the full project mapping back to its file.
    ///
    /// The file is regenerated wholesale, never patched. A clean store is
    /// a no-op, so flushing any number of times is safe; returns whether a
    /// write happened.
    pub fn flush(&mut self) -> Result<bool, ConfigError> {
        if !self.dirty {
            return Ok(false);
        }

        let mapping: BTreeMap<&str, &str> = self
            .project
            .values()
            .map(|entry| (entry.original.as_str(), entry.new_name.as_str()))
            .collect();
        let document = serde_yaml::to_string(&mapping).map_err(|error| {
            ConfigError::InvalidYaml {
                path: self.project_file.clone(),
                message: error.to_string(),
            }
        })?;

        fs::write(&self.project_file, document).map_err(|source| ConfigError::PersistFailed {
            path: self.project_file.clone(),
            source,
        })?;
        self.dirty = false;
        Ok(true)
    }
}

fn load_mapping_file(path: &Path) -> Result<BTreeMap<String, MappingEntry>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping: Option<BTreeMap<String, String>> =
        serde_yaml::from_str(&content).map_err(|error| ConfigError::InvalidYaml {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    Ok(mapping
        .unwrap_or_default()
        .into_iter()
        .map(|(original, new_name)| {
            (
                original.to_lowercase(),
                MappingEntry { original, new_name },
            )
        })
        .collect())
}
