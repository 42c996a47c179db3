// src/commands/reset_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct ResetCommand;

#[async_trait]
impl Command for ResetCommand {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn description(&self) -> &'static str {
        "Restore the default filesystem"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        ctx.tree.write().await.reset();
        CommandResult::success("Filesystem reset to defaults\n".to_string())
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
    async fn test_reset_restores_seed_layout() {
        let tree = Arc::new(RwLock::new(FileTree::with_default_layout()));
        {
            let mut tree = tree.write().await;
            tree.write_file("/junk.txt", "junk").unwrap();
            tree.change_directory("/docs").unwrap();
        }
        let ctx = make_ctx_with_tree(vec![], tree.clone());
        let result = ResetCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        let tree = tree.read().await;
        assert_eq!(tree.current_path(), "/");
        assert!(tree.resolve("/junk.txt").is_err());
        assert!(tree.resolve("/docs/readme.txt").is_ok());
    }
}
