//! Token-stream builders and fixtures for tests

use std::io::Write;

use tempfile::TempDir;
use typolift_core::{FileTokens, Token, TokenKind, Tokenizer};

use crate::features::FeatureConfiguration;
use crate::options::Options;
use crate::registry::SniffContext;

/// Feature configuration parsed from an inline YAML document.
pub fn feature_configuration(yaml: &str) -> FeatureConfiguration {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    FeatureConfiguration::load(&[file.path().to_path_buf()]).unwrap()
}

/// A sniff context rooted in a temporary directory: empty registries, an
/// empty mapping, and a mapping file that can safely be flushed.
pub fn context_in(dir: &TempDir) -> SniffContext {
    let options = Options {
        config_root: dir.path().join("config"),
        mapping_file: dir.path().join("LegacyClassnames.yaml"),
        ..Options::default()
    };
    SniffContext::new(options).unwrap()
}

/// Build a token stream from `(kind, content)` pairs, tracking line and
/// column the way a tokenizer would.
pub fn tokens(spec: &[(TokenKind, &str)]) -> Vec<Token> {
    let mut line = 1;
    let mut column = 1;
    spec.iter()
        .map(|(kind, content)| {
            let token = Token::new(*kind, *content, line, column);
            for c in content.chars() {
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            token
        })
        .collect()
}

pub fn php_file(spec: &[(TokenKind, &str)]) -> FileTokens {
    FileTokens::new("test.php", Tokenizer::Php, tokens(spec))
}

pub fn php_file_fixing(spec: &[(TokenKind, &str)]) -> FileTokens {
    FileTokens::new("test.php", Tokenizer::Php, tokens(spec)).with_fix_enabled(true)
}

pub fn typoscript_file(spec: &[(TokenKind, &str)]) -> FileTokens {
    FileTokens::new("setup.typoscript", Tokenizer::TypoScript, tokens(spec))
}
