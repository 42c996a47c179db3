// src/commands/grep/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::search::distance;

pub struct GrepCommand;

#[async_trait]
impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn description(&self) -> &'static str {
        "Find the file whose content is closest to a pattern"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(pattern) = ctx.args.first() else {
            return CommandResult::error("grep: missing operand\n".to_string());
        };

        let tree = ctx.tree.read().await;
        let paths = match tree.all_file_paths("/") {
            Ok(paths) => paths,
            Err(e) => return CommandResult::error(format!("grep: {e}\n")),
        };

        // Rank every file by edit distance between the pattern and its whole
        // content. Ties keep the earlier path (traversal order).
        let mut best: Option<(&str, usize)> = None;
        for path in &paths {
            let content = match tree.read_file(path) {
                Ok(content) => content,
                Err(_) => continue,
            };
            let d = distance(pattern, &content);
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((path, d));
            }
        }

        match best {
            Some((path, _)) => CommandResult::success(format!("{path}\n")),
            None => CommandResult::error("grep: no match found\n".to_string()),
        }
    }
}
