// src/commands/rmdir_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmdirCommand;

#[async_trait]
impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn description(&self) -> &'static str {
        "Remove empty directories"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("rmdir: missing operand\n".to_string());
        }
        let mut tree = ctx.tree.write().await;
        let mut stderr = String::new();
        for path in &ctx.args {
            if let Err(e) = tree.remove_empty_directory(path) {
                stderr.push_str(&format!("rmdir: {e}\n"));
            }
        }
        if stderr.is_empty() {
            CommandResult::success(String::new())
        } else {
            CommandResult::error(stderr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx_with_tree;
    use crate::fs::FileTree;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn test_rmdir_empty_directory() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec!["/home"], tree.clone());
        let result = RmdirCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert!(tree.read().await.resolve("/home").is_err());
    }

    #[tokio::test]
    async fn test_rmdir_refuses_non_empty() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec!["/docs"], tree.clone());
        let result = RmdirCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "rmdir: Directory not empty: /docs\n");
        assert!(tree.read().await.resolve("/docs").is_ok());
    }

    #[tokio::test]
    async fn test_rmdir_on_file() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec!["/docs/readme.txt"], tree);
        let result = RmdirCommand.execute(ctx).await;
        assert_eq!(result.stderr, "rmdir: Not a directory: /docs/readme.txt\n");
    }

    #[tokio::test]
    async fn test_rmdir_missing_operand() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec![], tree);
        let result = RmdirCommand.execute(ctx).await;
        assert_eq!(result.stderr, "rmdir: missing operand\n");
    }
}
