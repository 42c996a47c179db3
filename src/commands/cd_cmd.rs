// src/commands/cd_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the current directory"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        // bare `cd` goes home, which here is the root
        let path = ctx.args.first().map(String::as_str).unwrap_or("/");
        let mut tree = ctx.tree.write().await;
        match tree.change_directory(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("cd: {e}\n")),
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
    async fn test_cd_changes_cwd() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec!["/docs"], tree.clone());
        let result = CdCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(tree.read().await.current_path(), "/docs");
    }

    #[tokio::test]
    async fn test_cd_no_args_goes_to_root() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        tree.write().await.change_directory("/docs").unwrap();
        let ctx = make_ctx_with_tree(vec![], tree.clone());
        CdCommand.execute(ctx).await;
        assert_eq!(tree.read().await.current_path(), "/");
    }

    #[tokio::test]
    async fn test_cd_into_file_fails() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec!["/docs/readme.txt"], tree.clone());
        let result = CdCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "cd: Not a directory: /docs/readme.txt\n");
        assert_eq!(tree.read().await.current_path(), "/");
    }

    #[tokio::test]
    async fn test_cd_dotdot_at_root_is_noop() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        let ctx = make_ctx_with_tree(vec![".."], tree.clone());
        let result = CdCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(tree.read().await.current_path(), "/");
    }
}
