//! Sniff: classnames passed to instantiation helpers
//!
//! Covers `GeneralUtility::makeInstance` and the ObjectManager's `get` and
//! `create`; `create` itself is flagged as no longer supported.

use typolift_core::{FileTokens, TokenKind, FUNCTION_NAME_KINDS, STRING_KINDS};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};
use crate::support;

const INSTANTIATION_FUNCTIONS: &[&str] = &["makeInstance", "get", "create"];

pub struct ClassnameInstantiationSniff {
    features: FeatureSet,
}

impl ClassnameInstantiationSniff {
    pub const NAME: &'static str = "Classname.Instantiation";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }
}

impl Sniff for ClassnameInstantiationSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        FUNCTION_NAME_KINDS.to_vec()
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        if !support::is_function_call(file, position) {
            return;
        }
        let function_name = match file.token(position) {
            Some(token) => token.content.clone(),
            None => return,
        };
        if !INSTANTIATION_FUNCTIONS.contains(&function_name.as_str()) {
            return;
        }

        let close = file.find_next(&[TokenKind::CloseParen], position, None, false, false);
        let classname_position =
            match file.find_next(STRING_KINDS, position, close, false, false) {
                Some(found) => found,
                None => return,
            };

        if function_name == "create" {
            file.add_warning(
                "The \"create\" method of ObjectManager is no longer supported, please migrate to \"get\".",
                position,
                "mightBeDeprecatedMethod",
                &[],
            );
        }

        let classname = match file.token(classname_position) {
            Some(token) => token.content.clone(),
            None => return,
        };
        self.features
            .process(file, classname_position, &classname, context);
    }
}
