//! Command trait, command output, and the command registry.

use std::collections::HashMap;

use cyberdesk_types::error::Result;

use crate::alias::AliasResolver;
use crate::clock::Clock;
use crate::history::HistoryBuffer;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text for the scrollback. An empty string still prints one blank line.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to clear the terminal output buffer.
    Clear,
    /// Ask the host to open an external link, then print `notice`.
    OpenLink { url: String, notice: String },
    /// Ask the host to start a file download, then print `notice`.
    Download {
        href: String,
        file_name: String,
        notice: String,
    },
}

/// Command grouping used by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Resume,
    Action,
    System,
    Other,
}

impl Category {
    /// Listing order for `help`.
    pub const ORDER: [Category; 4] = [
        Category::Resume,
        Category::Action,
        Category::System,
        Category::Other,
    ];

    /// Heading printed above the group in `help`.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Resume => "Resume Commands",
            Category::Action => "Actions",
            Category::System => "System",
            Category::Other => "Other",
        }
    }

    /// Short lowercase tag for `help <command>`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Resume => "resume",
            Category::Action => "action",
            Category::System => "system",
            Category::Other => "other",
        }
    }
}

/// Read-only interpreter state passed to every command.
pub struct Environment<'a> {
    /// The active command registry.
    pub registry: &'a CommandRegistry,
    /// The active alias table.
    pub aliases: &'a AliasResolver,
    /// Submitted lines so far (the running line is not yet included).
    pub history: &'a HistoryBuffer,
    /// Wall clock for date queries.
    pub clock: &'a dyn Clock,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "help \[command\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> Category {
        Category::Other
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Name, description, and category of a registered command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: Category,
}

struct Entry {
    /// Lowercased name; the lookup key.
    key: String,
    command: Box<dyn Command>,
}

/// Registry of available commands.
///
/// Names are matched case-insensitively and keep their registration order.
pub struct CommandRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name
    /// in place.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => {
                log::debug!("Replacing command '{key}'");
                self.entries[slot].command = cmd;
            },
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, command: cmd });
            },
        }
    }

    /// Find a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| self.entries[slot].command.as_ref())
    }

    /// Whether a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Lowercased command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Commands grouped by [`Category::ORDER`], registration order within a
    /// group.
    pub fn list(&self) -> impl Iterator<Item = CommandInfo<'_>> {
        Category::ORDER.into_iter().flat_map(move |category| {
            self.entries
                .iter()
                .filter(move |e| e.command.category() == category)
                .map(|e| CommandInfo {
                    name: e.key.as_str(),
                    description: e.command.description(),
                    category: e.command.category(),
                })
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FixedClock;

    struct Named {
        name: String,
        description: String,
        category: Category,
    }

    impl Named {
        fn boxed(name: &str, description: &str, category: Category) -> Box<Self> {
            Box::new(Self {
                name: name.to_string(),
                description: description.to_string(),
                category,
            })
        }
    }

    impl Command for Named {
        fn name(&self) -> &str {
            &self.name
        }
        fn description(&self) -> &str {
            &self.description
        }
        fn usage(&self) -> &str {
            &self.name
        }
        fn category(&self) -> Category {
            self.category
        }
        fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(format!("{} {}", self.description, args.join(" "))))
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("skills", "Technical skills", Category::Resume));
        let cmd = reg.lookup("skills").unwrap();
        assert_eq!(cmd.description(), "Technical skills");
        assert!(reg.lookup("projects").is_none());
    }

    #[test]
    fn lookup_ignores_case() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("Help", "Show help", Category::System));
        assert!(reg.lookup("help").is_some());
        assert!(reg.lookup("HELP").is_some());
        assert!(reg.contains("hElP"));
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["help"]);
    }

    #[test]
    fn register_replaces_existing_command_in_place() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("alpha", "version A", Category::Other));
        reg.register(Named::boxed("beta", "beta", Category::Other));
        reg.register(Named::boxed("ALPHA", "version B", Category::Other));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.lookup("alpha").unwrap().description(), "version B");
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    }

    #[test]
    fn list_groups_by_category() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("help", "h", Category::System));
        reg.register(Named::boxed("misc", "m", Category::Other));
        reg.register(Named::boxed("github", "g", Category::Action));
        reg.register(Named::boxed("skills", "s", Category::Resume));
        reg.register(Named::boxed("clear", "c", Category::System));
        reg.register(Named::boxed("intro", "i", Category::Resume));

        let names: Vec<&str> = reg.list().map(|c| c.name).collect();
        assert_eq!(names, vec!["skills", "intro", "github", "help", "clear", "misc"]);
    }

    #[test]
    fn names_keep_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("zebra", "z", Category::System));
        reg.register(Named::boxed("alpha", "a", Category::Resume));
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["zebra", "alpha"]);
    }

    #[test]
    fn default_creates_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.list().count(), 0);
    }

    #[test]
    fn execute_receives_arguments_verbatim() {
        let mut reg = CommandRegistry::new();
        reg.register(Named::boxed("echo", "said", Category::Other));
        let aliases = AliasResolver::default();
        let history = HistoryBuffer::new();
        let clock = FixedClock::default();
        let env = Environment {
            registry: &reg,
            aliases: &aliases,
            history: &history,
            clock: &clock,
        };
        let out = reg.lookup("ECHO").unwrap().execute(&["Hello", "World"], &env).unwrap();
        assert_eq!(out, CommandOutput::Text("said Hello World".into()));
    }

    #[test]
    fn category_headings() {
        assert_eq!(Category::Resume.heading(), "Resume Commands");
        assert_eq!(Category::Action.heading(), "Actions");
        assert_eq!(Category::System.heading(), "System");
        assert_eq!(Category::Other.tag(), "other");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_is_case_insensitive(
                names in proptest::collection::hash_set("[a-z][a-z0-9]{0,10}", 1..16),
            ) {
                let mut reg = CommandRegistry::new();
                for name in &names {
                    reg.register(Named::boxed(name, name, Category::Other));
                }
                for name in &names {
                    let lower = reg.lookup(name).map(|c| c.description().to_string());
                    let upper = reg
                        .lookup(&name.to_uppercase())
                        .map(|c| c.description().to_string());
                    prop_assert!(lower.is_some());
                    prop_assert_eq!(lower, upper);
                }
            }
        }
    }
}
