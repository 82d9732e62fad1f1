//! Alias table: one-hop rewrite of the typed command name.

use std::collections::HashMap;

/// Resolves user-typed shorthands to a command plus fixed leading arguments.
///
/// Resolution is a single pass. If an alias expands to a name that is itself
/// an alias, the expansion is not followed; the dispatcher looks that name up
/// in the registry directly. This keeps cyclic tables harmless.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    /// Alias name (lowercased) -> `[command, extra...]`.
    table: HashMap<String, Vec<String>>,
    /// `(alias, expansion)` in source order, for `help`.
    entries: Vec<(String, String)>,
}

impl AliasResolver {
    /// Build a resolver from `(alias, expansion)` pairs.
    ///
    /// Blank expansions are skipped. A later duplicate (ignoring case)
    /// replaces the earlier expansion.
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut resolver = Self::default();
        for (alias, expansion) in pairs {
            let tokens: Vec<String> = expansion.split_whitespace().map(str::to_string).collect();
            let key = alias.trim().to_lowercase();
            if tokens.is_empty() || key.is_empty() {
                log::warn!("Ignoring empty alias '{alias}'");
                continue;
            }
            if resolver.table.insert(key.clone(), tokens).is_some() {
                resolver.entries.retain(|(a, _)| a.to_lowercase() != key);
            }
            resolver
                .entries
                .push((alias.trim().to_string(), expansion.trim().to_string()));
        }
        resolver
    }

    /// Rewrite `command` if it names an alias.
    ///
    /// The expansion's extra tokens are placed before `args`, in the order
    /// they appear in the alias. Unknown names pass through unchanged.
    pub fn resolve(&self, command: &str, args: Vec<String>) -> (String, Vec<String>) {
        let key = command.to_lowercase();
        match self.table.get(&key).and_then(|tokens| tokens.split_first()) {
            Some((target, extra)) => {
                let mut rewritten = Vec::with_capacity(extra.len() + args.len());
                rewritten.extend(extra.iter().cloned());
                rewritten.extend(args);
                log::debug!("Alias '{command}' -> '{target}'");
                (target.clone(), rewritten)
            },
            None => (command.to_string(), args),
        }
    }

    /// Expansion text for an alias, ignoring case.
    pub fn expansion(&self, alias: &str) -> Option<&str> {
        let key = alias.to_lowercase();
        self.entries
            .iter()
            .find(|(a, _)| a.to_lowercase() == key)
            .map(|(_, e)| e.as_str())
    }

    /// `(alias, expansion)` pairs in source order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
