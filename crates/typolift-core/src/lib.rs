//! typolift-core: Core abstractions for legacy-API sniffs
//!
//! This crate provides:
//! - `Token`, `TokenKind`, `Tokenizer`: the token model shared with the host
//! - `FileTokens`: per-file token stream with host-style lookups and the
//!   diagnostics channel
//! - `Fixer`: token-content replacement for fix passes
//! - `Diagnostic`: warnings and fixable errors attached to file positions
//! - `ConfigError`: fatal, fail-fast configuration errors

mod diagnostic;
mod error;
mod file;
mod fixer;
mod token;

pub use diagnostic::{Diagnostic, Severity};
pub use error::ConfigError;
pub use file::FileTokens;
pub use fixer::Fixer;
pub use token::{string_content, Token, TokenKind, Tokenizer, EMPTY_KINDS, FUNCTION_NAME_KINDS, STRING_KINDS};
