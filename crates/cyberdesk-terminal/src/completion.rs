//! Prefix completion over registered command names.

use crate::interpreter::CommandRegistry;

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched (or the partial was empty).
    None,
    /// Exactly one command matched; the input line becomes this name.
    Single(String),
    /// Several commands matched, in registration order. The input line is
    /// left alone; no common prefix is filled in.
    Multiple(Vec<String>),
}

/// Complete `partial` against command names (aliases are not offered).
///
/// Matching is a case-insensitive prefix test; matches are returned in the
/// registry's lowercase spelling.
pub fn complete(registry: &CommandRegistry, partial: &str) -> Completion {
    if partial.is_empty() {
        return Completion::None;
    }
    let lower = partial.to_lowercase();
    let mut matches: Vec<String> = registry
        .names()
        .filter(|name| name.starts_with(&lower))
        .map(str::to_string)
        .collect();
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches.remove(0)),
        _ => Completion::Multiple(matches),
    }
}
