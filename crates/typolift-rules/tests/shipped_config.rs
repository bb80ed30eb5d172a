//! End-to-end checks against the configuration shipped in `config/`

use std::path::PathBuf;

use typolift_core::{FileTokens, Token, TokenKind, Tokenizer};
use typolift_rules::{Options, SniffContext, SniffPack};

fn shipped_options(mapping_dir: &tempfile::TempDir) -> Options {
    let config_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config");
    Options {
        config_root,
        mapping_file: mapping_dir.path().join("LegacyClassnames.yaml"),
        ..Options::default()
    }
}

fn tokens(spec: &[(TokenKind, &str)]) -> Vec<Token> {
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

#[test]
fn shipped_configuration_loads() {
    let dir = tempfile::TempDir::new().unwrap();
    let options = shipped_options(&dir);
    let pack = SniffPack::new(&options).unwrap();
    assert!(pack.all_names().len() >= 14);
}

#[test]
fn removed_static_call_is_flagged() {
    use TokenKind::*;

    let dir = tempfile::TempDir::new().unwrap();
    let options = shipped_options(&dir);
    let pack = SniffPack::new(&options).unwrap();
    let mut context = SniffContext::new(options).unwrap();

    let mut file = FileTokens::new(
        "ext_tables.php",
        Tokenizer::Php,
        tokens(&[
            (OpenTag, "<?php"),
            (Whitespace, "\n"),
            (Identifier, "GeneralUtility"),
            (DoubleColon, "::"),
            (Identifier, "loadTCA"),
            (OpenParen, "("),
            (StringLiteral, "'tt_content'"),
            (CloseParen, ")"),
            (Semicolon, ";"),
        ]),
    );
    pack.run_file(&mut file, &mut context);

    let warnings: Vec<_> = file.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]
        .message
        .contains("TYPO3\\CMS\\Core\\Utility\\GeneralUtility::loadTCA"));
    assert!(warnings[0]
        .message
        .contains("There is no replacement, just remove call"));
}

#[test]
fn legacy_classname_is_fixed_and_mapping_stays_clean() {
    use TokenKind::*;

    let dir = tempfile::TempDir::new().unwrap();
    let options = shipped_options(&dir);
    let pack = SniffPack::new(&options).unwrap();
    let mut context = SniffContext::new(options).unwrap();

    let mut file = FileTokens::new(
        "class.tx_myext_pi1.php",
        Tokenizer::Php,
        tokens(&[
            (OpenTag, "<?php"),
            (Whitespace, "\n"),
            (Identifier, "t3lib_div"),
            (DoubleColon, "::"),
            (Identifier, "makeInstance"),
            (OpenParen, "("),
            (StringLiteral, "'Tx_Extbase_Object_ObjectManager'"),
            (CloseParen, ")"),
            (Semicolon, ";"),
        ]),
    )
    .with_fix_enabled(true);
    pack.run_file(&mut file, &mut context);

    let fixed = file.fixed_content();
    assert!(fixed.contains("\\TYPO3\\CMS\\Core\\Utility\\GeneralUtility::makeInstance"));
    assert!(fixed.contains("'\\TYPO3\\CMS\\Extbase\\Object\\ObjectManager'"));

    // Framework lookups never dirty the project mapping.
    context.flush().unwrap();
    assert!(!dir.path().join("LegacyClassnames.yaml").exists());
}

#[test]
fn discovered_class_definition_round_trips_through_the_mapping() {
    use TokenKind::*;

    let dir = tempfile::TempDir::new().unwrap();
    let options = shipped_options(&dir);
    let pack = SniffPack::new(&options).unwrap();
    let mut context = SniffContext::new(options.clone()).unwrap();

    let mut file = FileTokens::new(
        "class.tx_myext_service_import.php",
        Tokenizer::Php,
        tokens(&[
            (OpenTag, "<?php"),
            (Whitespace, "\n"),
            (ClassKeyword, "class"),
            (Whitespace, " "),
            (Identifier, "Tx_MyExt_Service_Import"),
            (Whitespace, " "),
            (OpenBrace, "{"),
        ]),
    );
    pack.run_file(&mut file, &mut context);
    context.flush().unwrap();

    // The next run resolves the discovered name from the persisted mapping.
    let mut next_run = SniffContext::new(options).unwrap();
    assert!(next_run.mapping.is_legacy_classname("tx_myext_service_import"));
    assert_eq!(
        next_run
            .mapping
            .get_new_classname("Tx_MyExt_Service_Import")
            .unwrap(),
        "YourCompany\\MyExt\\Service\\Import"
    );
    next_run.flush().unwrap();
}

#[test]
fn removed_typoscript_object_is_flagged() {
    use TokenKind::*;

    let dir = tempfile::TempDir::new().unwrap();
    let options = shipped_options(&dir);
    let pack = SniffPack::new(&options).unwrap();
    let mut context = SniffContext::new(options).unwrap();

    let mut file = FileTokens::new(
        "setup.typoscript",
        Tokenizer::TypoScript,
        vec![
            Token::new(ObjectIdentifier, "styles.insertContent", 1, 1),
            Token::new(ObjectConstructor, "CLEARGIF", 2, 10),
            Token::new(RightValue, "{$styles.content.imgtext.maxW}", 3, 10),
        ],
    );
    pack.run_file(&mut file, &mut context);

    let warnings: Vec<_> = file.warnings().collect();
    assert_eq!(warnings.len(), 3);
}
