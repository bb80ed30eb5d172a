//! Sniff trait, shared context and the sniff pack

use typolift_core::{ConfigError, FileTokens, TokenKind, Tokenizer};

use crate::features::FeatureConfiguration;
use crate::legacy::LegacyClassnameMapping;
use crate::options::Options;
use crate::removed::RemovalRegistry;
use crate::sniffs;

/// A sniff inspects one token position per invocation and reports through
/// the file's diagnostics channel.
///
/// Sniffs never fail: whatever they cannot derive from the token stream is
/// simply not reported.
pub trait Sniff {
    /// The unique identifier for this sniff (e.g. "Removed.GenericFunctionCall").
    fn name(&self) -> &'static str;

    /// Which host tokenizer this sniff applies to.
    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::Php
    }

    /// The token kinds this sniff is interested in.
    fn register(&self) -> Vec<TokenKind>;

    /// Process one matching token.
    fn process(&self, file: &mut FileTokens, position: usize, context: &mut SniffContext);
}

/// Shared mutable state passed down to every sniff invocation.
///
/// This is the single piece of cross-file state in a run. It is owned by
/// whoever drives the analysis and handed to each `process` call, so
/// writes (new legacy classnames discovered during a fix pass) are visible
/// to every later token and file without hidden global state. The owner
/// that opened the context flushes it.
pub struct SniffContext {
    pub options: Options,
    pub mapping: LegacyClassnameMapping,
    pub removed_extensions: RemovalRegistry,
}

impl SniffContext {
    /// Build the context: loads the mapping and the removed-extensions
    /// configuration once, before any token is processed.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        let framework_file = options.framework_mapping_file();
        let framework_file = framework_file.is_file().then_some(framework_file);
        let mapping =
            LegacyClassnameMapping::open(framework_file.as_deref(), &options.mapping_file)?;
        let removed_extensions =
            RemovalRegistry::extensions(&options.removed_extension_config_files()?)?;

        Ok(Self {
            options,
            mapping,
            removed_extensions,
        })
    }

    /// Flush pending mapping discoveries. Idempotent; safe to call any
    /// number of times.
    pub fn flush(&mut self) -> Result<(), ConfigError> {
        self.mapping.flush()?;
        Ok(())
    }
}

/// All sniffs of the upgrade standard, constructed once per run.
///
/// Construction reads every configuration source and fails fast on any
/// configuration error; afterwards the pack is read-only and does no I/O,
/// however many files the host feeds it.
pub struct SniffPack {
    sniffs: Vec<Box<dyn Sniff>>,
}

impl SniffPack {
    /// Create a pack with all built-in sniffs.
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        let features = FeatureConfiguration::load(&options.feature_config_files()?)?;

        let mut pack = Self { sniffs: Vec::new() };

        pack.register(Box::new(sniffs::RemovedFunctionCallSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedConstantUsageSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedClassSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedGlobalSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedHookSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedSignalSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedTypoScriptSniff::new(options)?));
        pack.register(Box::new(sniffs::RemovedTypoScriptConstantSniff::new(options)?));

        pack.register(Box::new(sniffs::ClassnameStaticCallSniff::new(&features)));
        pack.register(Box::new(sniffs::ClassnameUseSniff::new(&features)));
        pack.register(Box::new(sniffs::ClassnameInstantiationSniff::new(&features)));
        pack.register(Box::new(sniffs::ClassnameInheritanceSniff::new(&features)));
        pack.register(Box::new(sniffs::ClassnameDocCommentSniff::new(&features)));
        pack.register(Box::new(sniffs::ClassnameStringSniff::new(&features)));
        pack.register(Box::new(sniffs::MissingNamespaceSniff::new()));

        Ok(pack)
    }

    /// Register an additional sniff.
    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        self.sniffs.push(sniff);
    }

    /// All sniff names, for listing and host-side configuration.
    pub fn all_names(&self) -> Vec<&'static str> {
        self.sniffs.iter().map(|sniff| sniff.name()).collect()
    }

    /// Dispatch every token of a file to the sniffs registered for its
    /// kind, in token order. This mirrors the host's per-file loop.
    pub fn run_file(&self, file: &mut FileTokens, context: &mut SniffContext) {
        for position in 0..file.len() {
            let kind = match file.token(position) {
                Some(token) => token.kind,
                None => continue,
            };
            for sniff in &self.sniffs {
                if sniff.tokenizer() == file.tokenizer() && sniff.register().contains(&kind) {
                    sniff.process(file, position, context);
                }
            }
        }
    }
}
