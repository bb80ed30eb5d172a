//! Sniff: class definitions without a namespace
//!
//! A legacy `Tx_` class definition is rewritten to a namespaced one using
//! the configured vendor, and the discovered mapping is recorded so later
//! tokens and files resolve usages of the old name.

use typolift_core::{FileTokens, TokenKind};

use crate::registry::{Sniff, SniffContext};

pub struct MissingNamespaceSniff;

impl MissingNamespaceSniff {
    pub const NAME: &'static str = "LegacyClassname.MissingNamespace";

    pub fn new() -> Self {
        Self
    }
}

impl Default for MissingNamespaceSniff {
    fn default() -> Self {
        Self::new()
    }
}

impl Sniff for MissingNamespaceSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![
            TokenKind::ClassKeyword,
            TokenKind::InterfaceKeyword,
            TokenKind::TraitKeyword,
        ]
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        let has_namespace = position
            .checked_sub(1)
            .and_then(|from| {
                file.find_previous(&[TokenKind::NamespaceKeyword], from, false, false)
            })
            .is_some();
        if has_namespace {
            return;
        }

        let classname_position =
            match file.find_next(&[TokenKind::Identifier], position, None, false, false) {
                Some(found) => found,
                None => return,
            };
        let classname = match file.token(classname_position) {
            Some(token) => token.content.clone(),
            None => return,
        };

        let namespace = namespace_for(&classname, context.options.vendor());
        context
            .mapping
            .add_legacy_classname(&classname, &format!("{}\\{}", namespace, short_name(&classname)));

        let fix = file.add_fixable_error(
            "Legacy class definitions are not allowed; found \"%s\". Wrap your class inside a namespace.",
            classname_position,
            "legacyClassname",
            &[&classname],
        );
        if fix {
            file.fixer_mut()
                .replace_token(classname_position, short_name(&classname));
            if let Some(open_tag) = file.find_next(&[TokenKind::OpenTag], 0, None, false, false) {
                file.fixer_mut()
                    .replace_token(open_tag, format!("<?php\nnamespace {};\n", namespace));
            }
        }
    }
}

/// The class name without its legacy prefix parts.
fn short_name(classname: &str) -> &str {
    classname
        .rsplit('_')
        .next()
        .unwrap_or(classname)
}

/// Namespace derived from the legacy name: vendor plus all parts between
/// the `Tx_` prefix and the class name itself.
fn namespace_for(classname: &str, vendor: &str) -> String {
    let parts: Vec<&str> = classname.split('_').collect();
    let middle: &[&str] = if parts.len() > 2 {
        &parts[1..parts.len() - 1]
    } else {
        &[]
    };

    let mut namespace = vendor.to_string();
    for part in middle {
        namespace.push('\\');
        namespace.push_str(part);
    }
    namespace
}
