//! Sniff: references to removed classes
//!
//! Class records are matched by their short name, so both `RteHtmlParser`
//! and a fully qualified reference hit the same record.

use typolift_core::{ConfigError, FileTokens, TokenKind};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::{find_removed_usage, report};
use crate::removed::RemovalRegistry;

pub struct RemovedClassSniff {
    configured: RemovalRegistry,
}

impl RemovedClassSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::classnames(&options.removed_class_config_files()?)?,
        })
    }
}

impl Sniff for RemovedClassSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericClass"
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::Identifier]
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let removed = find_removed_usage(file, position, &self.configured);
        report(file, position, &removed);
    }
}
