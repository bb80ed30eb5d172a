//! typolift-rules: Upgrade sniffs for removed and legacy TYPO3 APIs
//!
//! Available sniffs:
//! - Removed.GenericFunctionCall: calls to removed functions and methods
//! - Removed.GenericConstantUsage: usages of removed constants
//! - Removed.GenericClass: references to removed classes
//! - Removed.GenericGlobal: accesses to removed global variables
//! - Removed.GenericHook: registrations of removed hooks
//! - Removed.GenericSignal: slots connected to removed signals
//! - Removed.TypoScript: removed TypoScript objects and paths
//! - Removed.TypoScriptConstant: removed TypoScript constants
//! - Classname.*: legacy classnames at their various usage sites
//! - LegacyClassname.MissingNamespace: namespace-less class definitions

pub mod features;
pub mod legacy;
pub mod options;
pub mod registry;
pub mod removed;
pub mod sniffs;
pub mod support;

#[cfg(test)]
mod testutil;

pub use features::{FeatureConfiguration, FeatureKind, FeatureSet};
pub use legacy::LegacyClassnameMapping;
pub use options::Options;
pub use registry::{Sniff, SniffContext, SniffPack};
pub use removed::{RemovalRecord, RemovalRegistry};
