//! The interpreter: one full submission cycle per input line.
//!
//! A submission echoes the line, resolves aliases, looks the command up,
//! runs it, writes the result, and records the line in history. Navigation
//! and completion events query history and the registry without touching
//! the submission path.

use std::rc::Rc;

use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::error::DeskError;
use cyberdesk_types::input::{Direction, TerminalEvent};
use cyberdesk_types::profile::Profile;

use crate::alias::AliasResolver;
use crate::clock::{Clock, SystemClock};
use crate::commands::build_registry;
use crate::completion::{Completion, complete};
use crate::history::HistoryBuffer;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::prompt::derive_prompt;

/// Where the interpreter sends everything the user should see.
pub trait OutputSink {
    /// Append one line to the scrollback.
    fn append_line(&mut self, text: &str);

    /// Clear the scrollback (the `clear` command).
    fn clear(&mut self);

    /// Replace the contents of the input line.
    fn set_input(&mut self, text: &str);

    /// Open an external link. Hosts without a browser can ignore this.
    fn open_link(&mut self, url: &str) {
        log::info!("Link requested: {url}");
    }

    /// Start a file download. Hosts without downloads can ignore this.
    fn download(&mut self, href: &str, file_name: &str) {
        log::info!("Download requested: {href} as {file_name}");
    }
}

/// Everything derived from the profile. Replaced as a whole on reload.
pub struct Snapshot {
    pub registry: CommandRegistry,
    pub aliases: AliasResolver,
    pub prompt: String,
}

impl Snapshot {
    /// Build the registry, alias table, and prompt for a profile.
    pub fn build(profile: Option<&Profile>, config: &DeskConfig) -> Self {
        let aliases = AliasResolver::new(
            profile
                .map(|p| p.aliases())
                .unwrap_or_default()
                .iter()
                .map(|(alias, expansion)| (alias.as_str(), expansion.as_str())),
        );
        Self {
            registry: build_registry(profile, config),
            aliases,
            prompt: derive_prompt(profile, config.prompt.as_deref()),
        }
    }
}

/// Line-oriented command interpreter.
pub struct Interpreter {
    config: DeskConfig,
    profile: Option<Profile>,
    active: Rc<Snapshot>,
    history: HistoryBuffer,
    clock: Box<dyn Clock>,
}

impl Interpreter {
    /// Create an interpreter with no profile: system commands only.
    pub fn new(config: DeskConfig) -> Self {
        let active = Rc::new(Snapshot::build(None, &config));
        Self {
            config,
            profile: None,
            active,
            history: HistoryBuffer::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Create an interpreter backed by a profile.
    pub fn with_profile(config: DeskConfig, profile: Profile) -> Self {
        let active = Rc::new(Snapshot::build(Some(&profile), &config));
        Self {
            config,
            profile: Some(profile),
            active,
            history: HistoryBuffer::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used by `date`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Swap in a new profile.
    ///
    /// The registry, aliases, and prompt are rebuilt off to the side and
    /// then replace the active snapshot in one step. History is kept.
    pub fn set_profile(&mut self, profile: Profile, sink: &mut dyn OutputSink) {
        let next = Snapshot::build(Some(&profile), &self.config);
        log::info!(
            "Profile loaded: {} commands, {} aliases",
            next.registry.len(),
            next.aliases.len()
        );
        self.active = Rc::new(next);

        let suggestions = profile.suggested_commands();
        if self.config.show_suggestions && !suggestions.is_empty() {
            sink.append_line("");
            sink.append_line(&format!("Suggested commands: {}", suggestions.join(", ")));
        }
        self.profile = Some(profile);
    }

    /// Current prompt text.
    pub fn prompt(&self) -> &str {
        &self.active.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.active.registry
    }

    pub fn aliases(&self) -> &AliasResolver {
        &self.active.aliases
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// The active snapshot. Stays valid after a later profile swap.
    pub fn snapshot(&self) -> Rc<Snapshot> {
        Rc::clone(&self.active)
    }

    /// Route a host event to the matching operation.
    pub fn handle(&mut self, event: TerminalEvent, sink: &mut dyn OutputSink) {
        match event {
            TerminalEvent::Submit(line) => self.submit(&line, sink),
            TerminalEvent::Navigate(direction) => self.navigate(direction, sink),
            TerminalEvent::Complete(partial) => self.complete(&partial, sink),
        }
    }

    /// Run one input line.
    ///
    /// Never fails: unknown commands and handler errors are written to the
    /// scrollback. Blank input only clears the input line.
    pub fn submit(&mut self, line: &str, sink: &mut dyn OutputSink) {
        let line = line.trim();
        if line.is_empty() {
            sink.set_input("");
            return;
        }

        let snapshot = Rc::clone(&self.active);
        sink.append_line(&format!("{} {line}", snapshot.prompt));

        let mut tokens = line.split_whitespace();
        let typed = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        let (command, args) = snapshot.aliases.resolve(typed, args);
        log::debug!("Dispatching '{line}' as {command} {args:?}");

        match snapshot.registry.lookup(&command) {
            Some(cmd) => {
                let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
                let env = Environment {
                    registry: &snapshot.registry,
                    aliases: &snapshot.aliases,
                    history: &self.history,
                    clock: self.clock.as_ref(),
                };
                match cmd.execute(&arg_refs, &env) {
                    Ok(output) => emit(output, sink),
                    Err(e) => {
                        log::warn!("Command '{command}' failed: {e}");
                        append_text(sink, &error_text(e));
                    },
                }
            },
            None => {
                sink.append_line(&format!("Command not found: {command}"));
                sink.append_line("Type 'help' for available commands.");
            },
        }

        sink.set_input("");
        self.history.append(line);
    }

    /// Recall an older or newer history entry into the input line.
    pub fn navigate(&mut self, direction: Direction, sink: &mut dyn OutputSink) {
        if let Some(text) = self.history.navigate(direction) {
            sink.set_input(text);
        }
    }

    /// Tab completion for the current input text.
    pub fn complete(&self, partial: &str, sink: &mut dyn OutputSink) {
        match complete(&self.active.registry, partial) {
            Completion::None => {},
            Completion::Single(name) => sink.set_input(&name),
            Completion::Multiple(names) => sink.append_line(&names.join("  ")),
        }
    }
}

fn emit(output: CommandOutput, sink: &mut dyn OutputSink) {
    match output {
        CommandOutput::Text(text) => append_text(sink, &text),
        CommandOutput::None => {},
        CommandOutput::Clear => sink.clear(),
        CommandOutput::OpenLink { url, notice } => {
            sink.open_link(&url);
            append_text(sink, &notice);
        },
        CommandOutput::Download {
            href,
            file_name,
            notice,
        } => {
            sink.download(&href, &file_name);
            append_text(sink, &notice);
        },
    }
}

/// `error: <msg>`, without the variant prefix for command failures.
fn error_text(e: DeskError) -> String {
    match e {
        DeskError::Command(msg) => format!("error: {msg}"),
        other => format!("error: {other}"),
    }
}

/// Write text line by line. Empty text still produces one blank line.
fn append_text(sink: &mut dyn OutputSink, text: &str) {
    if text.is_empty() {
        sink.append_line("");
        return;
    }
    for line in text.lines() {
        sink.append_line(line);
    }
}
