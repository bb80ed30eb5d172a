//! Sniff: classnames in `use` imports
//!
//! Rewrites keep no leading `\`: imports are already fully qualified.

use typolift_core::{FileTokens, TokenKind};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};

pub struct ClassnameUseSniff {
    features: FeatureSet,
}

impl ClassnameUseSniff {
    pub const NAME: &'static str = "Classname.Use";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }
}

impl Sniff for ClassnameUseSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::UseKeyword]
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        let start = match file.find_next(&[TokenKind::Identifier], position, None, false, false) {
            Some(found) => found,
            None => return,
        };
        let end = match file.find_next(
            &[TokenKind::Identifier, TokenKind::Backslash],
            start,
            None,
            true,
            true,
        ) {
            Some(found) => found,
            None => return,
        };

        let classname = file.tokens_as_string(start, end);
        self.features
            .process_with_prefix(file, start, &classname, context, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{context_in, feature_configuration, php_file_fixing};
    use tempfile::TempDir;
    use typolift_core::TokenKind::*;

    #[test]
    fn test_legacy_import_is_fixed_without_prefix() {
        let dir = TempDir::new().unwrap();
        let mut context = context_in(&dir);
        context
            .mapping
            .add_legacy_classname("t3lib_div", "TYPO3\\CMS\\Core\\Utility\\GeneralUtility");

        let sniff = ClassnameUseSniff::new(&feature_configuration(
            "legacyClassname:\n  - Classname.Use\n",
        ));
        let mut file = php_file_fixing(&[
            (UseKeyword, "use"),
            (Whitespace, " "),
            (Identifier, "t3lib_div"),
            (Semicolon, ";"),
        ]);
        sniff.process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 1);
        assert_eq!(
            file.fixed_content(),
            "use TYPO3\\CMS\\Core\\Utility\\GeneralUtility;"
        );
    }

    #[test]
    fn test_use_without_name_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let mut context = context_in(&dir);

        let sniff = ClassnameUseSniff::new(&feature_configuration(
            "legacyClassname:\n  - Classname.Use\n",
        ));
        let mut file = php_file_fixing(&[(UseKeyword, "use"), (Whitespace, " ")]);
        sniff.process(&mut file, 0, &mut context);
        assert!(file.diagnostics().is_empty());
    }
}
