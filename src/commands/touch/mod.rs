// src/commands/touch/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create empty files"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("touch: missing operand\n".to_string());
        }
        let mut tree = ctx.tree.write().await;
        let mut stderr = String::new();
        for path in &ctx.args {
            if let Err(e) = tree.create_file(path) {
                stderr.push_str(&format!("touch: {e}\n"));
            }
        }
        if stderr.is_empty() {
            CommandResult::success(String::new())
        } else {
            CommandResult::error(stderr)
        }
    }
}
