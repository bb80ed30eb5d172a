//! Sniff: classnames in `extends` and `implements` clauses

use typolift_core::{FileTokens, TokenKind};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};

use super::classname_after;

pub struct ClassnameInheritanceSniff {
    features: FeatureSet,
}

impl ClassnameInheritanceSniff {
    pub const NAME: &'static str = "Classname.Inheritance";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }

    /// Every interface between `implements` and the class body.
    fn process_interfaces(
        &self,
        file: &mut FileTokens,
        position: usize,
        context: &mut SniffContext,
    ) {
        let body = file
            .find_next(&[TokenKind::OpenBrace], position, None, false, false)
            .unwrap_or(file.len());

        let mut search = position;
        while let Some(interface) = classname_after(file, search) {
            if interface.position >= body {
                break;
            }
            self.features
                .process(file, interface.position, &interface.content, context);
            search = interface.end;
        }
    }
}

impl Sniff for ClassnameInheritanceSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::ExtendsKeyword, TokenKind::ImplementsKeyword]
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        let kind = match file.token(position) {
            Some(token) => token.kind,
            None => return,
        };

        if kind == TokenKind::ImplementsKeyword {
            self.process_interfaces(file, position, context);
            return;
        }

        if let Some(parent) = classname_after(file, position) {
            self.features
                .process(file, parent.position, &parent.content, context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{context_in, feature_configuration, php_file_fixing};
    use tempfile::TempDir;
    use typolift_core::TokenKind::*;

    fn sniff() -> ClassnameInheritanceSniff {
        ClassnameInheritanceSniff::new(&feature_configuration(
            "legacyClassname:\n  - Classname.Inheritance\n",
        ))
    }

    #[test]
    fn test_legacy_parent_class_is_fixed() {
        let dir = TempDir::new().unwrap();
        let mut context = context_in(&dir);
        context.mapping.add_legacy_classname(
            "Tx_Extbase_MVC_Controller_ActionController",
            "TYPO3\\CMS\\Extbase\\Mvc\\Controller\\ActionController",
        );

        let mut file = php_file_fixing(&[
            (ExtendsKeyword, "extends"),
            (Whitespace, " "),
            (Identifier, "Tx_Extbase_MVC_Controller_ActionController"),
            (Whitespace, " "),
            (OpenBrace, "{"),
        ]);
        sniff().process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 1);
        assert_eq!(
            file.fixed_content(),
            "extends \\TYPO3\\CMS\\Extbase\\Mvc\\Controller\\ActionController {"
        );
    }

    #[test]
    fn test_every_implemented_interface_is_checked() {
        let dir = TempDir::new().unwrap();
        let mut context = context_in(&dir);
        context.mapping.add_legacy_classname(
            "Tx_Extbase_MVC_View_ViewInterface",
            "TYPO3\\CMS\\Extbase\\Mvc\\View\\ViewInterface",
        );
        context.mapping.add_legacy_classname(
            "Tx_Extbase_Object_SingletonInterface",
            "TYPO3\\CMS\\Core\\SingletonInterface",
        );

        let mut file = php_file_fixing(&[
            (ImplementsKeyword, "implements"),
            (Whitespace, " "),
            (Identifier, "Tx_Extbase_MVC_View_ViewInterface"),
            (Comma, ","),
            (Whitespace, " "),
            (Identifier, "Tx_Extbase_Object_SingletonInterface"),
            (Whitespace, " "),
            (OpenBrace, "{"),
        ]);
        sniff().process(&mut file, 0, &mut context);

        assert_eq!(file.diagnostics().len(), 2);
    }

    #[test]
    fn test_interfaces_after_body_are_ignored() {
        let dir = TempDir::new().unwrap();
        let mut context = context_in(&dir);
        context
            .mapping
            .add_legacy_classname("t3lib_div", "TYPO3\\CMS\\Core\\Utility\\GeneralUtility");

        let mut file = php_file_fixing(&[
            (ImplementsKeyword, "implements"),
            (Whitespace, " "),
            (Identifier, "SomeInterface"),
            (Whitespace, " "),
            (OpenBrace, "{"),
            (Whitespace, " "),
            (Identifier, "t3lib_div"),
        ]);
        sniff().process(&mut file, 0, &mut context);
        assert!(file.diagnostics().is_empty());
    }
}
