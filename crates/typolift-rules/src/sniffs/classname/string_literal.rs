//! Sniff: classnames inside string literals
//!
//! Configuration strings may combine several classnames with directive
//! syntax, e.g. `Classname->method` or `Classname & OtherClassname`.

use typolift_core::{FileTokens, TokenKind, STRING_KINDS};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};

pub struct ClassnameStringSniff {
    features: FeatureSet,
}

impl ClassnameStringSniff {
    pub const NAME: &'static str = "Classname.String";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }
}

impl Sniff for ClassnameStringSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        STRING_KINDS.to_vec()
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        let content = match file.token(position) {
            Some(token) => token.content.clone(),
            None => return,
        };
        if content.len() < 2 {
            return;
        }

        // Special chars like ":" and "&" are used in configuration directives.
        let inner = content[1..content.len() - 1].replace("->", " ");
        let classnames: Vec<&str> = inner
            .split(|c: char| c.is_whitespace() || c == ':' || c == '&')
            .filter(|candidate| !candidate.is_empty())
            .collect();

        for classname in classnames {
            self.features.process(file, position, classname, context);
        }
    }
}
