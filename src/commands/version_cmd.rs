// src/commands/version_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct VersionCommand;

#[async_trait]
impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Print the version"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(format!("memshell v{}\n", env!("CARGO_PKG_VERSION")))
    }
}
