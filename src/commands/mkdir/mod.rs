// src/commands/mkdir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create directories"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("mkdir: missing operand\n".to_string());
        }
        let mut tree = ctx.tree.write().await;
        let mut stderr = String::new();
        for path in &ctx.args {
            if let Err(e) = tree.make_directory(path) {
                stderr.push_str(&format!("mkdir: {e}\n"));
            }
        }
        if stderr.is_empty() {
            CommandResult::success(String::new())
        } else {
            CommandResult::error(stderr)
        }
    }
}
