//! Sniff: accesses to removed global variables
//!
//! Matches both spellings: `$TYPO3_DB` and `$GLOBALS['TYPO3_DB']`.

use typolift_core::{ConfigError, FileTokens, TokenKind, STRING_KINDS};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::report;
use crate::removed::RemovalRegistry;

pub struct RemovedGlobalSniff {
    configured: RemovalRegistry,
}

impl RemovedGlobalSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::flat(&options.removed_global_config_files()?)?,
        })
    }
}

impl Sniff for RemovedGlobalSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericGlobal"
    }

    fn register(&self) -> Vec<TokenKind> {
        vec![TokenKind::Variable]
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let content = match file.token(position) {
            Some(token) => token.content.clone(),
            None => return,
        };
        let variable_name = match content.strip_prefix('$') {
            Some(name) => name.to_string(),
            None => return,
        };

        let variable_name = if variable_name == "GLOBALS" {
            match file
                .find_next(STRING_KINDS, position + 1, None, false, true)
                .and_then(|found| file.token(found))
            {
                Some(token) => token.string_content().to_string(),
                None => return,
            }
        } else {
            variable_name
        };

        if !self.configured.is_removed(&variable_name) {
            return;
        }
        if let Ok(record) = self.configured.get_removed(&variable_name) {
            report(file, position, &[record]);
        }
    }
}
