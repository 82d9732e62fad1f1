//! Prompt derivation.

use cyberdesk_types::profile::Profile;

/// Prompt shown when neither the config nor a profile supplies one.
pub const DEFAULT_PROMPT: &str = "hacker@cyberdesk $";

/// Work out the prompt string.
///
/// Precedence: the literal `override_prompt`, the profile's terminal prompt,
/// `<handle>@portfolio $`, the identity name squashed to a lowercase user
/// name, the older top-level name, then [`DEFAULT_PROMPT`].
pub fn derive_prompt(profile: Option<&Profile>, override_prompt: Option<&str>) -> String {
    if let Some(literal) = override_prompt.filter(|p| !p.trim().is_empty()) {
        return literal.to_string();
    }
    let Some(profile) = profile else {
        return DEFAULT_PROMPT.to_string();
    };
    if let Some(prompt) = profile
        .terminal
        .as_ref()
        .and_then(|t| t.prompt.as_deref())
        .filter(|p| !p.trim().is_empty())
    {
        return prompt.to_string();
    }
    let identity = profile.identity.as_ref();
    if let Some(handle) = identity
        .and_then(|i| i.handle.as_deref())
        .filter(|h| !h.trim().is_empty())
    {
        return format!("{handle}@portfolio $");
    }
    let name = identity
        .and_then(|i| i.name.as_deref())
        .or(profile.name.as_deref())
        .map(user_name)
        .filter(|n| !n.is_empty());
    match name {
        Some(user) => format!("{user}@portfolio $"),
        None => DEFAULT_PROMPT.to_string(),
    }
}

/// "Ada Lovelace" -> "adalovelace".
fn user_name(display: &str) -> String {
    display
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
