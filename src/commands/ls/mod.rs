// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let path = ctx.args.first().map(String::as_str).unwrap_or("");
        let tree = ctx.tree.read().await;
        match tree.list(path) {
            Ok(entries) if entries.is_empty() => CommandResult::success(String::new()),
            Ok(entries) => CommandResult::success(format!("{}\n", entries.join("\n"))),
            Err(e) => CommandResult::error(format!("ls: {e}\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;

    #[tokio::test]
    async fn test_ls_default_lists_cwd() {
        let ctx = make_ctx(vec![]);
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "home/\ndocs/\n");
    }

    #[tokio::test]
    async fn test_ls_path() {
        let ctx = make_ctx(vec!["/docs"]);
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.stdout, "readme.txt\n");
    }

    #[tokio::test]
    async fn test_ls_file_names_itself() {
        let ctx = make_ctx(vec!["/docs/readme.txt"]);
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.stdout, "readme.txt\n");
    }

    #[tokio::test]
    async fn test_ls_missing_path() {
        let ctx = make_ctx(vec!["/nope"]);
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "ls: Path not found: /nope\n");
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let ctx = make_ctx(vec!["/home"]);
        let result = LsCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.is_empty());
    }
}
