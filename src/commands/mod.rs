// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod grep;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod reset_cmd;
pub mod rm;
pub mod rmdir_cmd;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod version_cmd;

pub use registry::{create_default_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
