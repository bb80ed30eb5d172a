//! Classname sniffs: detect classnames at various usage sites and hand
//! them to the configured features

pub mod doc_comment;
pub mod inheritance;
pub mod instantiation;
pub mod missing_namespace;
pub mod static_call;
pub mod string_literal;
pub mod use_statement;

pub use doc_comment::ClassnameDocCommentSniff;
pub use inheritance::ClassnameInheritanceSniff;
pub use instantiation::ClassnameInstantiationSniff;
pub use missing_namespace::MissingNamespaceSniff;
pub use static_call::ClassnameStaticCallSniff;
pub use string_literal::ClassnameStringSniff;
pub use use_statement::ClassnameUseSniff;

use typolift_core::{FileTokens, TokenKind};

/// A classname located in the token stream: its first token, the position
/// one past its last token, and the joined text.
pub(crate) struct ClassnameMatch {
    pub position: usize,
    pub end: usize,
    pub content: String,
}

const CLASSNAME_KINDS: &[TokenKind] = &[TokenKind::Identifier, TokenKind::Backslash];

/// The classname ending right before `position` (e.g. before a `::`).
pub(crate) fn classname_before(file: &FileTokens, position: usize) -> Option<ClassnameMatch> {
    let before_classname =
        file.find_previous(CLASSNAME_KINDS, position.checked_sub(1)?, true, true)?;
    let classname_position =
        file.find_next(&[TokenKind::Identifier], before_classname, Some(position), false, false)?;
    let end = file
        .find_next(CLASSNAME_KINDS, classname_position + 1, Some(position + 1), true, true)
        .unwrap_or(position);

    Some(ClassnameMatch {
        position: classname_position,
        end,
        content: file.tokens_as_string(classname_position, end),
    })
}

/// The classname starting right after `position` (e.g. after `extends`).
pub(crate) fn classname_after(file: &FileTokens, position: usize) -> Option<ClassnameMatch> {
    let classname_position = file.find_next(&[TokenKind::Identifier], position, None, false, false)?;
    let end = file.find_next(CLASSNAME_KINDS, classname_position, None, true, true)?;

    Some(ClassnameMatch {
        position: classname_position,
        end,
        content: file.tokens_as_string(classname_position, end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::php_file;
    use typolift_core::TokenKind::*;

    #[test]
    fn test_classname_before_separator() {
        let file = php_file(&[
            (Whitespace, " "),
            (Identifier, "Tx_Extbase_Object_ObjectManager"),
            (DoubleColon, "::"),
            (Identifier, "get"),
        ]);

        let found = classname_before(&file, 2).unwrap();
        assert_eq!(found.position, 1);
        assert_eq!(found.content, "Tx_Extbase_Object_ObjectManager");
    }

    #[test]
    fn test_namespaced_classname_before_separator() {
        let file = php_file(&[
            (Other, "="),
            (Whitespace, " "),
            (Identifier, "Core"),
            (Backslash, "\\"),
            (Identifier, "Utility"),
            (DoubleColon, "::"),
        ]);

        let found = classname_before(&file, 5).unwrap();
        assert_eq!(found.content, "Core\\Utility");
    }

    #[test]
    fn test_classname_after_keyword() {
        let file = php_file(&[
            (ExtendsKeyword, "extends"),
            (Whitespace, " "),
            (Identifier, "Tx_Extbase_MVC_Controller_ActionController"),
            (Whitespace, " "),
            (OpenBrace, "{"),
        ]);

        let found = classname_after(&file, 0).unwrap();
        assert_eq!(found.position, 2);
        assert_eq!(found.content, "Tx_Extbase_MVC_Controller_ActionController");
    }

    #[test]
    fn test_missing_classname_is_a_miss() {
        let file = php_file(&[(ExtendsKeyword, "extends"), (Whitespace, " ")]);
        assert!(classname_after(&file, 0).is_none());
    }
}
