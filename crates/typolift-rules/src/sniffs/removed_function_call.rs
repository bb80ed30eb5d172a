//! Sniff: calls to removed functions and methods
//!
//! Removed functions are configured in YAML files, split per source
//! version, e.g. `config/removed/functions/7.0.yaml`.

use typolift_core::{ConfigError, FileTokens, TokenKind, FUNCTION_NAME_KINDS};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::{find_removed_usage, report};
use crate::removed::RemovalRegistry;
use crate::support;

pub struct RemovedFunctionCallSniff {
    configured: RemovalRegistry,
}

impl RemovedFunctionCallSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::php_usage(&options.removed_function_config_files()?)?,
        })
    }
}

impl Sniff for RemovedFunctionCallSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericFunctionCall"
    }

    fn register(&self) -> Vec<TokenKind> {
        FUNCTION_NAME_KINDS.to_vec()
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        if !support::is_function_call(file, position) {
            return;
        }

        let removed = find_removed_usage(file, position, &self.configured);
        report(file, position, &removed);
    }
}
