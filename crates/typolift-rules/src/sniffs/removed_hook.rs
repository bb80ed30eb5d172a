//! Sniff: registrations of removed hooks
//!
//! Hook registrations address `$GLOBALS['TYPO3_CONF_VARS']` with two
//! string keys: the file path and the hook name. Both string literals are
//! combined into the configured `path->hookName` lookup key.

use typolift_core::{ConfigError, FileTokens, TokenKind, STRING_KINDS};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::report;
use crate::removed::RemovalRegistry;

pub struct RemovedHookSniff {
    configured: RemovalRegistry,
}

impl RemovedHookSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::hooks(&options.removed_hook_config_files()?)?,
        })
    }
}

impl Sniff for RemovedHookSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericHook"
    }

    fn register(&self) -> Vec<TokenKind> {
        STRING_KINDS.to_vec()
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let first_part = match file.token(position) {
            Some(token) => token.string_content().to_string(),
            None => return,
        };
        let second_part = match file
            .find_next(STRING_KINDS, position + 1, None, false, false)
            .and_then(|found| file.token(found))
        {
            Some(token) => token.string_content().to_string(),
            None => return,
        };

        let lookup = format!("{}->{}", first_part, second_part);
        if !self.configured.is_removed(&lookup) {
            return;
        }
        if let Ok(record) = self.configured.get_removed(&lookup) {
            report(file, position, &[record]);
        }
    }
}
