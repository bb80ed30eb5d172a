//! Shared token-inspection helpers used by several sniffs

use typolift_core::{string_content, FileTokens, TokenKind, EMPTY_KINDS};

/// Whether the name token at `position` is a function call: the next
/// meaningful token must open a parenthesis, and the name must not be part
/// of a function definition.
pub fn is_function_call(file: &FileTokens, position: usize) -> bool {
    let open = match file.find_next(EMPTY_KINDS, position + 1, None, true, false) {
        Some(found) => found,
        None => return false,
    };
    if file.token(open).map(|token| token.kind) != Some(TokenKind::OpenParen) {
        return false;
    }

    // A `function foo(` or `function &foo(` is a definition, not a call.
    let mut skip = EMPTY_KINDS.to_vec();
    skip.push(TokenKind::Ampersand);
    let previous = position
        .checked_sub(1)
        .and_then(|from| file.find_previous(&skip, from, true, false));

    previous.and_then(|found| file.token(found)).map(|token| token.kind)
        != Some(TokenKind::FunctionKeyword)
}

/// Whether the name token at `position` reads as a constant: a bare name
/// not followed by an opening parenthesis.
pub fn is_constant_usage(file: &FileTokens, position: usize) -> bool {
    match file.find_next(EMPTY_KINDS, position + 1, None, true, false) {
        Some(next) => file.token(next).map(|token| token.kind) != Some(TokenKind::OpenParen),
        None => true,
    }
}

/// The raw parameters of the call at `position`, split on commas with
/// quotes and whitespace stripped.
pub fn function_call_parameters(file: &FileTokens, position: usize) -> Vec<String> {
    let start = match file.find_next(&[TokenKind::OpenParen], position, None, false, false) {
        Some(found) => found,
        None => return Vec::new(),
    };
    let end = match file.find_next(&[TokenKind::CloseParen], start, None, false, false) {
        Some(found) => found,
        None => return Vec::new(),
    };

    file.tokens_as_string(start + 1, end)
        .split(',')
        .map(|parameter| string_content(parameter).to_string())
        .collect()
}
