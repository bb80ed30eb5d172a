//! Sniff: usages of removed constants, global and class constants alike

use typolift_core::{ConfigError, FileTokens, TokenKind};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::{find_removed_usage, report};
use crate::removed::RemovalRegistry;
use crate::support;

pub struct RemovedConstantUsageSniff {
    configured: RemovalRegistry,
}

impl RemovedConstantUsageSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::php_usage(&options.removed_constant_config_files()?)?,
        })
    }
}

impl Sniff for RemovedConstantUsageSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericConstantUsage"
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::Identifier]
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        if !support::is_constant_usage(file, position) {
            return;
        }

        let removed = find_removed_usage(file, position, &self.configured);
        report(file, position, &removed);
    }
}
