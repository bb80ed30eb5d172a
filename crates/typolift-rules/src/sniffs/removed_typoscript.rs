//! Sniff: removed TypoScript objects and paths
//!
//! Checks object identifiers and object constructors against the
//! configured removals. The token content alone can be a relative path
//! inside a nested block, so the fully-qualified identifier attached by
//! the tokenizer is checked as well.

use typolift_core::{ConfigError, FileTokens, TokenKind, Tokenizer};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::report;
use crate::removed::RemovalRegistry;

pub struct RemovedTypoScriptSniff {
    configured: RemovalRegistry,
}

impl RemovedTypoScriptSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::typoscript(&options.removed_typoscript_config_files()?)?,
        })
    }
}

impl Sniff for RemovedTypoScriptSniff {
    fn name(&self) -> &'static str {
        "Removed.TypoScript"
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::TypoScript
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::ObjectConstructor, TokenKind::ObjectIdentifier]
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let (kind, identifiers) = match file.token(position) {
            Some(token) => {
                let mut identifiers = vec![token.content.clone()];
                if let Some(fq_identifier) = &token.fq_object_identifier {
                    if *fq_identifier != token.content {
                        identifiers.push(fq_identifier.clone());
                    }
                }
                (token.kind, identifiers)
            }
            None => return,
        };

        for identifier in identifiers {
            if !self.configured.is_removed(&identifier) {
                continue;
            }
            if let Ok(record) = self.configured.get_removed(&identifier) {
                if record.ts_type == Some(kind) {
                    report(file, position, &[record]);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::context_in;
    use std::fs;
    use tempfile::TempDir;
    use typolift_core::{FileTokens, Token};

    fn sniff(dir: &TempDir) -> RemovedTypoScriptSniff {
        let typoscript = dir.path().join("config/removed/typoscript");
        fs::create_dir_all(&typoscript).unwrap();
        fs::write(
            typoscript.join("7.5.yaml"),
            "\"7.5\":\n  new CLEARGIF:\n    replacement: null\n    docsUrl: \"https://x\"\n  mod.wizards.newContentElement:\n    replacement: null\n    docsUrl: \"https://y\"\n",
        )
        .unwrap();
        RemovedTypoScriptSniff::new(&Options {
            config_root: dir.path().join("config"),
            mapping_file: dir.path().join("LegacyClassnames.yaml"),
            ..Options::default()
        })
        .unwrap()
    }

    fn typoscript_tokens(tokens: Vec<Token>) -> FileTokens {
        FileTokens::new("setup.typoscript", Tokenizer::TypoScript, tokens)
    }

    #[test]
    fn test_removed_constructor_is_reported() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let mut file = typoscript_tokens(vec![Token::new(
            TokenKind::ObjectConstructor,
            "CLEARGIF",
            3,
            12,
        )]);
        sniff.process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 1);
        assert_eq!(file.diagnostics()[0].line, 3);
    }

    #[test]
    fn test_identifier_record_does_not_match_constructor_token() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let mut file = typoscript_tokens(vec![Token::new(
            TokenKind::ObjectConstructor,
            "mod.wizards.newContentElement",
            1,
            1,
        )]);
        sniff.process(&mut file, 0, &mut context);
        assert!(file.diagnostics().is_empty());
    }

    #[test]
    fn test_fully_qualified_identifier_is_checked() {
        let dir = TempDir::new().unwrap();
        let sniff = sniff(&dir);
        let mut context = context_in(&dir);

        let token = Token::new(TokenKind::ObjectIdentifier, "newContentElement", 2, 5)
            .with_fq_object_identifier("mod.wizards.newContentElement");
        let mut file = typoscript_tokens(vec![token]);
        sniff.process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 1);
        assert_eq!(file.diagnostics()[0].code, "mod-wizards-newContentElement");
    }
}
