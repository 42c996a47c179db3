// src/commands/echo/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Print text, or write it to a file with >"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // only the first `>` is a redirect marker
        if let Some(pos) = ctx.args.iter().position(|a| a == ">") {
            let Some(target) = ctx.args.get(pos + 1) else {
                return CommandResult::error("echo: missing redirect target\n".to_string());
            };
            let text = ctx.args[..pos].join(" ");
            let mut tree = ctx.tree.write().await;
            return match tree.write_file(target, &text) {
                Ok(()) => CommandResult::success(String::new()),
                Err(e) => CommandResult::error(format!("echo: {e}\n")),
            };
        }
        CommandResult::success(format!("{}\n", ctx.args.join(" ")))
    }
}
