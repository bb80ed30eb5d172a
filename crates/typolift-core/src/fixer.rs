//! Token-content replacement with conflict detection

use std::collections::HashMap;

use crate::token::Token;

/// Collects token replacements during a fix pass and renders the result.
///
/// Replacements are keyed by token position; replacing the same token with
/// two different contents in one pass is rejected, the first replacement
/// wins.
#[derive(Debug, Default)]
pub struct Fixer {
    replacements: HashMap<usize, String>,
}

impl Fixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replacement for the token at `position`.
    ///
    /// Returns false when the token already has a conflicting replacement;
    /// the existing replacement is kept in that case.
    pub fn replace_token(&mut self, position: usize, content: impl Into<String>) -> bool {
        let content = content.into();
        match self.replacements.get(&position) {
            Some(existing) if *existing != content => false,
            _ => {
                self.replacements.insert(position, content);
                true
            }
        }
    }

    pub fn has_fixes(&self) -> bool {
        !self.replacements.is_empty()
    }

    pub fn fix_count(&self) -> usize {
        self.replacements.len()
    }

    /// Render the fixed source: original token contents with replacements
    /// substituted.
    pub fn apply(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                self.replacements
                    .get(&position)
                    .map(String::as_str)
                    .unwrap_or(&token.content)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn tokens(contents: &[&str]) -> Vec<Token> {
        contents
            .iter()
            .map(|content| Token::new(TokenKind::Identifier, *content, 1, 1))
            .collect()
    }

    #[test]
    fn test_apply_without_fixes() {
        let tokens = tokens(&["a", " ", "b"]);
        let fixer = Fixer::new();
        assert_eq!(fixer.apply(&tokens), "a b");
        assert!(!fixer.has_fixes());
    }

    #[test]
    fn test_apply_with_replacement() {
        let tokens = tokens(&["t3lib_div", "::", "method"]);
        let mut fixer = Fixer::new();
        assert!(fixer.replace_token(0, "\\TYPO3\\CMS\\Core\\Utility\\GeneralUtility"));
        assert_eq!(
            fixer.apply(&tokens),
            "\\TYPO3\\CMS\\Core\\Utility\\GeneralUtility::method"
        );
    }

    #[test]
    fn test_conflicting_replacement_is_rejected() {
        let mut fixer = Fixer::new();
        assert!(fixer.replace_token(0, "first"));
        assert!(!fixer.replace_token(0, "second"));
        assert_eq!(fixer.fix_count(), 1);

        let tokens = tokens(&["original"]);
        assert_eq!(fixer.apply(&tokens), "first");
    }

    #[test]
    fn test_same_replacement_twice_is_fine() {
        let mut fixer = Fixer::new();
        assert!(fixer.replace_token(0, "same"));
        assert!(fixer.replace_token(0, "same"));
        assert_eq!(fixer.fix_count(), 1);
    }
}
