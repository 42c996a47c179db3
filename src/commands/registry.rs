// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// Command table. Registration order is preserved: `names()` iterates in
/// the order commands were registered, which is also the tie-break order
/// for closest-command suggestions.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: IndexMap::new() }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// `(name, description)` pairs in registration order.
    pub fn descriptions(&self) -> Vec<(&str, &str)> {
        self.commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::grep::GrepCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::reset_cmd::ResetCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::version_cmd::VersionCommand;

/// Register the full built-in command set.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(VersionCommand));
    registry.register(Box::new(ResetCommand));
}

/// A registry with every built-in registered.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
