//! Per-file token stream facade with host-style lookups and diagnostics

use crate::diagnostic::{Diagnostic, Severity};
use crate::fixer::Fixer;
use crate::token::{Token, TokenKind, Tokenizer};

/// Kinds that end a statement-local scan.
const LOCAL_BOUNDARIES: &[TokenKind] = &[TokenKind::Semicolon, TokenKind::OpenTag];

/// The token stream of one file under analysis, plus the diagnostics
/// channel and fixer the host exposes to sniffs.
///
/// Lookup misses are `None`, never errors: the source under analysis may be
/// incomplete or syntactically unusual, and a sniff that cannot derive the
/// tokens it expects simply has nothing to report.
#[derive(Debug)]
pub struct FileTokens {
    name: String,
    tokenizer: Tokenizer,
    tokens: Vec<Token>,
    fix_enabled: bool,
    diagnostics: Vec<Diagnostic>,
    fixer: Fixer,
}

impl FileTokens {
    pub fn new(name: impl Into<String>, tokenizer: Tokenizer, tokens: Vec<Token>) -> Self {
        Self {
            name: name.into(),
            tokenizer,
            tokens,
            fix_enabled: false,
            diagnostics: Vec::new(),
            fixer: Fixer::new(),
        }
    }

    /// Enable the fix pass: fixable errors will request their rewrite.
    pub fn with_fix_enabled(mut self, fix_enabled: bool) -> Self {
        self.fix_enabled = fix_enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Find the previous token at or before `from` whose kind is in `kinds`
    /// (or not in `kinds` when `exclude` is set). With `local`, the scan
    /// stops at statement boundaries.
    pub fn find_previous(
        &self,
        kinds: &[TokenKind],
        from: usize,
        exclude: bool,
        local: bool,
    ) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let mut position = from.min(self.tokens.len() - 1);
        loop {
            let kind = self.tokens[position].kind;
            if kinds.contains(&kind) != exclude {
                return Some(position);
            }
            if local && LOCAL_BOUNDARIES.contains(&kind) {
                return None;
            }
            position = position.checked_sub(1)?;
        }
    }

    /// Find the next token at or after `from` whose kind is in `kinds` (or
    /// not in `kinds` when `exclude` is set). `end` bounds the scan
    /// exclusively; with `local`, the scan stops at statement boundaries.
    pub fn find_next(
        &self,
        kinds: &[TokenKind],
        from: usize,
        end: Option<usize>,
        exclude: bool,
        local: bool,
    ) -> Option<usize> {
        let end = end.unwrap_or(self.tokens.len()).min(self.tokens.len());
        for position in from..end {
            let kind = self.tokens[position].kind;
            if kinds.contains(&kind) != exclude {
                return Some(position);
            }
            if local && LOCAL_BOUNDARIES.contains(&kind) {
                return None;
            }
        }
        None
    }

    /// Concatenated source text of the tokens in `start..end`.
    pub fn tokens_as_string(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        if start >= end {
            return String::new();
        }
        self.tokens[start..end]
            .iter()
            .map(|token| token.content.as_str())
            .collect()
    }

    /// Emit a warning for the token at `position`.
    ///
    /// `message` is a template with `%s` placeholders filled from `data` in
    /// order; `code` identifies the warning for host-side configuration.
    pub fn add_warning(&mut self, message: &str, position: usize, code: &str, data: &[&str]) {
        self.push_diagnostic(Severity::Warning, message, position, code, data);
    }

    /// Emit a fixable error for the token at `position`.
    ///
    /// Returns true when a fix pass is running and the caller should
    /// perform its rewrite through the fixer.
    pub fn add_fixable_error(
        &mut self,
        message: &str,
        position: usize,
        code: &str,
        data: &[&str],
    ) -> bool {
        self.push_diagnostic(Severity::FixableError, message, position, code, data);
        self.fix_enabled
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
    }

    pub fn fixer_mut(&mut self) -> &mut Fixer {
        &mut self.fixer
    }

    pub fn fixer(&self) -> &Fixer {
        &self.fixer
    }

    /// Render the file content with all recorded fixes applied.
    pub fn fixed_content(&self) -> String {
        self.fixer.apply(&self.tokens)
    }

    fn push_diagnostic(
        &mut self,
        severity: Severity,
        message: &str,
        position: usize,
        code: &str,
        data: &[&str],
    ) {
        let (line, column) = self
            .tokens
            .get(position)
            .map(|token| (token.line, token.column))
            .unwrap_or((0, 0));
        self.diagnostics.push(Diagnostic {
            severity,
            message: format_message(message, data),
            code: code.to_string(),
            line,
            column,
        });
    }
}

/// Fill `%s` placeholders from `data` in order; surplus placeholders stay
/// empty.
fn format_message(template: &str, data: &[&str]) -> String {
    let mut pieces = template.split("%s");
    let mut message = String::with_capacity(template.len());
    if let Some(first) = pieces.next() {
        message.push_str(first);
    }
    let mut values = data.iter();
    for piece in pieces {
        message.push_str(values.next().copied().unwrap_or(""));
        message.push_str(piece);
    }
    message
}
