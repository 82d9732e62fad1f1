//! System commands: help, clear, history, date, whoami.

use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::error::{DeskError, Result};
use cyberdesk_types::profile::Profile;

use crate::clock::format_timestamp;
use crate::commands::non_blank;
use crate::interpreter::{Category, Command, CommandOutput, CommandRegistry, Environment};

/// What `whoami` prints when the profile has no name.
const ANONYMOUS: &str = "hacker@cyberdesk";

/// Register the always-present system commands.
pub fn register_system_commands(
    reg: &mut CommandRegistry,
    profile: Option<&Profile>,
    config: &DeskConfig,
) {
    reg.register(Box::new(HelpCmd {
        label_width: config.label_width,
    }));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(WhoamiCmd {
        text: whoami_text(profile),
    }));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd {
    label_width: usize,
}

impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        match args.first() {
            Some(&name) => describe_one(name, env),
            None => Ok(CommandOutput::Text(self.overview(env))),
        }
    }
}

impl HelpCmd {
    fn overview(&self, env: &Environment<'_>) -> String {
        let w = self.label_width;
        let mut out = String::from("Available commands:\n");
        let mut current = None;
        for info in env.registry.list() {
            if current != Some(info.category) {
                out.push_str(&format!("\n{}:\n", info.category.heading()));
                current = Some(info.category);
            }
            out.push_str(&format!("  {:<w$} - {}\n", info.name, info.description));
        }
        if !env.aliases.is_empty() {
            out.push_str("\nAliases:\n");
            for (alias, target) in env.aliases.entries() {
                out.push_str(&format!("  {alias:<w$} -> {target}\n"));
            }
        }
        out.trim_end().to_string()
    }
}

fn describe_one(name: &str, env: &Environment<'_>) -> Result<CommandOutput> {
    if let Some(cmd) = env.registry.lookup(name) {
        return Ok(CommandOutput::Text(format!(
            "{} ({})\n  {}\n  Usage: {}",
            name.to_lowercase(),
            cmd.category().tag(),
            cmd.description(),
            cmd.usage()
        )));
    }
    if let Some(expansion) = env.aliases.expansion(name) {
        return Ok(CommandOutput::Text(format!(
            "{name}: alias for '{expansion}'"
        )));
    }
    Err(DeskError::Command(format!("help: no such command: {name}")))
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;

impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format_timestamp(&env.clock.now())))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd {
    text: String,
}

impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(self.text.clone()))
    }
}

/// Name and headline from the identity block, else the older top-level
/// fields, else [`ANONYMOUS`].
fn whoami_text(profile: Option<&Profile>) -> String {
    let Some(profile) = profile else {
        return ANONYMOUS.to_string();
    };
    let (name, headline) = match &profile.identity {
        Some(id) => (id.name.as_deref(), id.headline.as_deref()),
        None => (profile.name.as_deref(), profile.title.as_deref()),
    };
    let lines: Vec<&str> = [non_blank(name), non_blank(headline)]
        .into_iter()
        .flatten()
        .collect();
    if lines.is_empty() {
        ANONYMOUS.to_string()
    } else {
        lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;

impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> Category {
        Category::System
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let entries = env.history.entries();
        if entries.is_empty() {
            return Ok(CommandOutput::Text("(no history)".to_string()));
        }
        let lines: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>4}  {line}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
