//! Sniff: slots connected to removed signals
//!
//! Matches `->connect(Class::class, 'signalName', ...)` calls with at
//! least four arguments and looks up the normalized `\Class::signalName`
//! key.

use typolift_core::{ConfigError, FileTokens, TokenKind, FUNCTION_NAME_KINDS};

use crate::options::Options;
use crate::registry::{Sniff, SniffContext};
use crate::removed::resolver::report;
use crate::removed::RemovalRegistry;
use crate::support;

pub struct RemovedSignalSniff {
    configured: RemovalRegistry,
}

impl RemovedSignalSniff {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self {
            configured: RemovalRegistry::flat(&options.removed_signal_config_files()?)?,
        })
    }
}

impl Sniff for RemovedSignalSniff {
    fn name(&self) -> &'static str {
        "Removed.GenericSignal"
    }

    fn register(&self) -> Vec<TokenKind> {
        FUNCTION_NAME_KINDS.to_vec()
    }

    fn process(&self, file: &mut FileTokens, position: usize, _context: &mut SniffContext) {
        let is_connect = file
            .token(position)
            .map(|token| token.content == "connect")
            .unwrap_or(false);
        if !is_connect || !support::is_function_call(file, position) {
            return;
        }

        let parameters = support::function_call_parameters(file, position);
        if parameters.len() < 4 {
            return;
        }

        let lookup = format!("{}::{}", normalize_class(&parameters[0]), parameters[1]);
        if !self.configured.is_removed(&lookup) {
            return;
        }
        if let Ok(record) = self.configured.get_removed(&lookup) {
            report(file, position, &[record]);
        }
    }
}

/// Same formatted class representation for all incoming spellings:
/// `::class` constants, escaped namespaces and missing leading separators.
fn normalize_class(raw: &str) -> String {
    let mut class = raw.replace("::class", "").replace("\\\\", "\\");
    if !class.starts_with('\\') {
        class = format!("\\{}", class);
    }
    class
}
