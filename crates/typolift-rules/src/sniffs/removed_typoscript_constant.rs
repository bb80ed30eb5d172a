//! Sniff: removed TypoScript constants
//!
//! Constants appear as `{$styles.content.imgtext.maxW}` inside right
//! values; every occurrence in a value is checked.

use regex::Regex;
use typolift_core::{ConfigError, FileTokens, TokenKind, Tokenizer};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::report;
use crate::removed::RemovalRegistry;

pub struct RemovedTypoScriptConstantSniff {
    configured: RemovalRegistry,
    constant_pattern: Regex,
}

impl RemovedTypoScriptConstantSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::flat(
                &options.removed_typoscript_constant_config_files()?,
            )?,
            constant_pattern: Regex::new(r"\{\$([^}]+)\}").unwrap(),
        })
    }
}

impl Sniff for RemovedTypoScriptConstantSniff {
    fn name(&self) -> &'static str {
        "Removed.TypoScriptConstant"
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::TypoScript
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::RightValue, TokenKind::RightValueMultiline]
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let content = match file.token(position) {
            Some(token) => token.content.clone(),
            None => return,
        };

        let mut removed = Vec::new();
        for capture in self.constant_pattern.captures_iter(&content) {
            let constant = &capture[1];
            if !self.configured.is_removed(constant) {
                continue;
            }
            if let Ok(record) = self.configured.get_removed(constant) {
                removed.push(record);
            }
        }
        report(file, position, &removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{context_in, typoscript_file};
    use std::fs;
    use tempfile::TempDir;
    use typolift_core::TokenKind::*;

    fn sniff(dir: &TempDir) -> RemovedTypoScriptConstantSniff {
        let constants = dir.path().join("config/removed/typoscript_constant");
        fs::create_dir_all(&constants).unwrap();
        fs::write(
            constants.join("7.1.yaml"),
            "\"7.1\":\n  styles.content.imgtext.maxW:\n    replacement: null\n    docsUrl: \"https://x\"\n",
        )
        .unwrap();
        RemovedTypoScriptConstantSniff::new(&Options {
            config_root: dir.path().join("config"),
            mapping_file: dir.path().join("LegacyClassnames.yaml"),
            ..Options::default()
        })
        .unwrap()
    }

    #[test]
    fn test_removed_constant_in_value_is_reported() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let mut file = typoscript_file(&[(RightValue, "{$styles.content.imgtext.maxW}")]);
        sniff.process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 1);
        assert!(file.diagnostics()[0]
            .message
            .contains("styles.content.imgtext.maxW"));
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let mut file = typoscript_file(&[(
            RightValueMultiline,
            "{$styles.content.imgtext.maxW} / {$styles.content.imgtext.maxW}",
        )]);
        sniff.process(&mut file, 0, &mut context);
        assert_eq!(file.diagnostics().len(), 2);
    }

    #[test]
    fn test_plain_value_is_ignored() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let mut file = typoscript_file(&[(RightValue, "600")]);
        sniff.process(&mut file, 0, &mut context);
        assert!(file.diagnostics().is_empty());
    }
}
