//! Profile-driven command set for the CYBERDESK terminal.

use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::profile::Profile;

use crate::interpreter::CommandRegistry;

/// Build the full command registry for a profile.
///
/// System commands are always present. Resume and action commands are only
/// registered for the sections the profile actually has, so a missing
/// section never surfaces as a runtime error.
pub fn build_registry(profile: Option<&Profile>, config: &DeskConfig) -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    crate::register_system_commands(&mut reg, profile, config);
    if let Some(profile) = profile {
        crate::register_resume_commands(&mut reg, profile, config);
        crate::register_action_commands(&mut reg, profile, config);
    }
    log::debug!("Built registry with {} commands", reg.len());
    reg
}

/// Section title, a rule of `=`, and a blank line.
pub(crate) fn section_heading(title: &str, rule_width: usize) -> String {
    format!("{title}\n{}\n\n", "=".repeat(rule_width))
}

/// One indented bullet line.
pub(crate) fn bullet(item: &str) -> String {
    format!("  • {item}\n")
}

/// `Some(s)` if `s` has visible content.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
