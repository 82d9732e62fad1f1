//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name from the loaded profile. The
//! interpreter echoes each input line, rewrites it through the alias table,
//! dispatches `execute()`, and records the line in history.

mod action_commands;
mod alias;
mod clock;
mod commands;
mod completion;
mod dispatcher;
mod history;
mod interpreter;
mod prompt;
mod resume_commands;
mod system_commands;

#[cfg(test)]
pub(crate) mod test_utils;

/// Register download and external link commands into a registry.
pub use action_commands::register_action_commands;
/// One-hop alias table built from the profile.
pub use alias::AliasResolver;
/// Wall clock used by `date`.
pub use clock::{Clock, SystemClock, format_timestamp};
/// Build the full registry (system, resume, action) for a profile.
pub use commands::build_registry;
/// Prefix completion over registered command names.
pub use completion::{Completion, complete};
/// The interpreter, its output sink, and the per-profile snapshot.
pub use dispatcher::{Interpreter, OutputSink, Snapshot};
/// Submitted-line history with a recall cursor.
pub use history::HistoryBuffer;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, signals, link and download requests).
pub use interpreter::CommandOutput;
/// Registry of available commands with case-insensitive lookup.
pub use interpreter::CommandRegistry;
/// Help grouping and per-command summaries.
pub use interpreter::{Category, CommandInfo};
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Prompt text derivation.
pub use prompt::{DEFAULT_PROMPT, derive_prompt};
/// Register resume section commands (intro, skills, experience, ...) into a registry.
pub use resume_commands::register_resume_commands;
/// Register always-present system commands (help, clear, date, ...) into a registry.
pub use system_commands::register_system_commands;
