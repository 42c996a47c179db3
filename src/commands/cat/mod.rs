// src/commands/cat/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Print file contents"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("cat: missing operand\n".to_string());
        }
        let tree = ctx.tree.read().await;
        let mut stdout = String::new();
        let mut stderr = String::new();
        for path in &ctx.args {
            match tree.read_file(path) {
                Ok(content) => {
                    stdout.push_str(&content);
                    if !content.is_empty() && !content.ends_with('\n') {
                        stdout.push('\n');
                    }
                }
                Err(e) => stderr.push_str(&format!("cat: {e}\n")),
            }
        }
        let exit_code = if stderr.is_empty() { 0 } else { 1 };
        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}
