// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fs::FileTree;
use crate::history::History;

/// Outcome of one command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// Everything a command wrapper needs: already-tokenized arguments plus
/// shared handles to the session's tree and history.
pub struct CommandContext {
    pub args: Vec<String>,
    pub tree: Arc<RwLock<FileTree>>,
    pub history: Arc<RwLock<History>>,
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line summary shown by `help`.
    fn description(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}
