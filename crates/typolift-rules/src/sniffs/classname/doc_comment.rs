//! Sniff: classnames in doc-comment type annotations

use typolift_core::{FileTokens, TokenKind};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};

const ALLOWED_TAGS: &[&str] = &["@param", "@return", "@var", "@validate"];

pub struct ClassnameDocCommentSniff {
    features: FeatureSet,
}

impl ClassnameDocCommentSniff {
    pub const NAME: &'static str = "Classname.PhpDocComment";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }
}

impl Sniff for ClassnameDocCommentSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::DocCommentTag]
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        let tag = match file.token(position) {
            Some(token) => token.content.clone(),
            None => return,
        };
        if !ALLOWED_TAGS.contains(&tag.as_str()) {
            return;
        }

        let classname_position =
            match file.find_next(&[TokenKind::DocCommentString], position, None, false, false) {
                Some(found) => found,
                None => return,
            };
        let annotation = match file.token(classname_position) {
            Some(token) => token.content.clone(),
            None => return,
        };

        // Type annotations may be unions, generics or signatures.
        let classnames: Vec<&str> = annotation
            .split(|c: char| c == '|' || c.is_whitespace() || c == '<' || c == '>' || c == '(')
            .filter(|candidate| !candidate.is_empty())
            .collect();

        for classname in classnames {
            self.features
                .process(file, classname_position, classname, context);
        }
    }
}
