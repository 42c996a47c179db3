// src/commands/rm/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn description(&self) -> &'static str {
        "Remove files (with -r, directories too)"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut recursive = false;
        let mut paths = Vec::new();
        for arg in &ctx.args {
            match arg.as_str() {
                "-r" | "-R" => recursive = true,
                _ => paths.push(arg.as_str()),
            }
        }
        if paths.is_empty() {
            return CommandResult::error("rm: missing operand\n".to_string());
        }

        let mut tree = ctx.tree.write().await;
        let mut stderr = String::new();
        for path in paths {
            let outcome = if recursive {
                tree.remove_recursive(path)
            } else {
                tree.remove_file(path)
            };
            match outcome {
                Ok(()) => {}
                Err(FsError::IsADirectory { path }) => {
                    stderr.push_str(&format!(
                        "rm: Is a directory: {path} (use rmdir or rm -r)\n"
                    ));
                }
                Err(e) => stderr.push_str(&format!("rm: {e}\n")),
            }
        }
        if stderr.is_empty() {
            CommandResult::success(String::new())
        } else {
            CommandResult::error(stderr)
        }
    }
}
