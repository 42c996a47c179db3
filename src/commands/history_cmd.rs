// src/commands/history_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show command history (-c to clear)"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.first().map(String::as_str) == Some("-c") {
            ctx.history.write().await.clear();
            return CommandResult::success("Command history cleared\n".to_string());
        }

        let history = ctx.history.read().await;
        let mut out = String::new();
        for (i, entry) in history.entries().iter().enumerate() {
            out.push_str(&format!("{:5}  {}\n", i + 1, entry));
        }
        CommandResult::success(out)
    }
}
