// src/commands/clear_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the screen"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        // ANSI: erase display, cursor home
        CommandResult::success("\x1b[2J\x1b[1;1H".to_string())
    }
}
