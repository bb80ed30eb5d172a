//! Option handling with defaults
//!
//! Wraps the knobs the host's option system exposes: the vendor used to
//! generate new namespaces, the mapping-file location, and one overridable
//! glob pattern per removal category. Glob patterns resolve to sorted file
//! lists once at startup.

use std::path::PathBuf;

use typolift_core::ConfigError;

/// Resolved options for one analysis run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Vendor used to generate new namespaces.
    pub vendor: String,
    /// Directory holding the shipped configuration.
    pub config_root: PathBuf,
    /// Read-write mapping file for legacy classnames discovered at runtime.
    pub mapping_file: PathBuf,
    /// Extension names whose `Tx_` classnames might be legacy.
    pub legacy_extensions: Vec<String>,

    // Per-category glob overrides; the default pattern below config_root
    // applies when unset.
    pub removed_function_files: Option<String>,
    pub removed_constant_files: Option<String>,
    pub removed_class_files: Option<String>,
    pub removed_global_files: Option<String>,
    pub removed_hook_files: Option<String>,
    pub removed_signal_files: Option<String>,
    pub removed_extension_files: Option<String>,
    pub removed_typoscript_files: Option<String>,
    pub removed_typoscript_constant_files: Option<String>,
    pub feature_files: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            vendor: "YourCompany".to_string(),
            config_root: PathBuf::from("config"),
            mapping_file: PathBuf::from("LegacyClassnames.yaml"),
            legacy_extensions: vec!["Extbase".to_string(), "Fluid".to_string()],
            removed_function_files: None,
            removed_constant_files: None,
            removed_class_files: None,
            removed_global_files: None,
            removed_hook_files: None,
            removed_signal_files: None,
            removed_extension_files: None,
            removed_typoscript_files: None,
            removed_typoscript_constant_files: None,
            feature_files: None,
        }
    }
}

impl Options {
    /// Options resolving shipped configuration below the given root.
    pub fn with_config_root(config_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            ..Self::default()
        }
    }

    /// The configured vendor, trimmed of namespace separators.
    pub fn vendor(&self) -> &str {
        self.vendor.trim_matches(|c| c == '\\' || c == '/')
    }

    /// The framework-provided legacy-classname mapping shipped with the
    /// configuration.
    pub fn framework_mapping_file(&self) -> PathBuf {
        self.config_root.join("legacy_classnames.yaml")
    }

    pub fn removed_function_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_function_files, "removed/functions/*.yaml")
    }

    pub fn removed_constant_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_constant_files, "removed/constants/*.yaml")
    }

    pub fn removed_class_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_class_files, "removed/classes/*.yaml")
    }

    pub fn removed_global_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_global_files, "removed/globals/*.yaml")
    }

    pub fn removed_hook_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_hook_files, "removed/hooks/*.yaml")
    }

    pub fn removed_signal_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_signal_files, "removed/signals/*.yaml")
    }

    pub fn removed_extension_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_extension_files, "removed/extensions/*.yaml")
    }

    pub fn removed_typoscript_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.removed_typoscript_files, "removed/typoscript/*.yaml")
    }

    pub fn removed_typoscript_constant_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(
            &self.removed_typoscript_constant_files,
            "removed/typoscript_constant/*.yaml",
        )
    }

    pub fn feature_config_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.file_names(&self.feature_files, "features/*.yaml")
    }

    fn file_names(
        &self,
        pattern_override: &Option<String>,
        default_pattern: &str,
    ) -> Result<Vec<PathBuf>, ConfigError> {
        let pattern = match pattern_override {
            Some(pattern) => pattern.clone(),
            None => self
                .config_root
                .join(default_pattern)
                .to_string_lossy()
                .into_owned(),
        };
        resolve_glob(&pattern)
    }
}

fn resolve_glob(pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let paths = glob::glob(pattern).map_err(|error| ConfigError::InvalidGlob {
        pattern: pattern.to_string(),
        message: error.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|error| {
            let path = error.path().to_path_buf();
            ConfigError::UnreadableFile {
                path,
                source: error.into_error(),
            }
        })?;
        files.push(path);
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.vendor(), "YourCompany");
        assert_eq!(options.config_root, Path::new("config"));
        assert_eq!(options.legacy_extensions, vec!["Extbase", "Fluid"]);
    }

    #[test]
    fn test_vendor_is_trimmed() {
        let options = Options {
            vendor: "\\Acme\\".to_string(),
            ..Options::default()
        };
        assert_eq!(options.vendor(), "Acme");
    }

    #[test]
    fn test_glob_resolution_is_sorted() {
        let dir = TempDir::new().unwrap();
        let functions = dir.path().join("removed/functions");
        fs::create_dir_all(&functions).unwrap();
        fs::write(functions.join("8.0.yaml"), "").unwrap();
        fs::write(functions.join("7.0.yaml"), "").unwrap();

        let options = Options::with_config_root(dir.path());
        let files = options.removed_function_config_files().unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("7.0.yaml"));
        assert!(files[1].ends_with("8.0.yaml"));
    }

    #[test]
    fn test_missing_directory_resolves_empty() {
        let dir = TempDir::new().unwrap();
        let options = Options::with_config_root(dir.path());
        assert!(options.removed_hook_config_files().unwrap().is_empty());
    }

    #[test]
    fn test_override_pattern() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.yaml"), "").unwrap();

        let options = Options {
            removed_function_files: Some(
                dir.path().join("*.yaml").to_string_lossy().into_owned(),
            ),
            ..Options::default()
        };
        let files = options.removed_function_config_files().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("custom.yaml"));
    }
}
