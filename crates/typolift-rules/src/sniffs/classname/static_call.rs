//! Sniff: classnames in static calls

use typolift_core::{FileTokens, TokenKind};

use crate::features::{FeatureConfiguration, FeatureSet};
use crate::registry::{Sniff, SniffContext};

use super::classname_before;

pub struct ClassnameStaticCallSniff {
    features: FeatureSet,
}

impl ClassnameStaticCallSniff {
    pub const NAME: &'static str = "Classname.StaticCall";

    pub fn new(features: &FeatureConfiguration) -> Self {
        Self {
            features: features.for_sniff(Self::NAME),
        }
    }
}

impl Sniff for ClassnameStaticCallSniff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::DoubleColon]
    }

    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext) {
        if let Some(classname) = classname_before(file, position) {
            self.features
                .process(file, classname.position, &classname.content, context);
        }
    }
}
