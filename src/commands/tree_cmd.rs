// src/commands/tree_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct TreeCommand;

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn description(&self) -> &'static str {
        "Show the whole tree as ASCII art"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let tree = ctx.tree.read().await;
        let lines = tree.render_tree();
        if lines.is_empty() {
            CommandResult::success(String::new())
        } else {
            CommandResult::success(format!("{}\n", lines.join("\n")))
        }
    }
}
