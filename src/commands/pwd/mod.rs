// src/commands/pwd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the current directory"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let tree = ctx.tree.read().await;
        CommandResult::success(format!("{}\n", tree.current_path()))
    }
}
