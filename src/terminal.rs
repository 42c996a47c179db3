//! Terminal session: tokenizes input lines, dispatches to registered
//! commands, keeps history, and snapshots the session after every line.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::FileTree;
use crate::history::{History, DEFAULT_MAX_HISTORY};
use crate::search::closest;
use crate::store::{SessionSnapshot, SnapshotStore};

/// Unknown-command suggestions require an edit distance strictly below this.
pub const SUGGESTION_THRESHOLD: usize = 5;

pub struct TerminalOptions {
    pub max_history: usize,
    pub store: Option<Arc<dyn SnapshotStore>>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self { max_history: DEFAULT_MAX_HISTORY, store: None }
    }
}

pub struct Terminal {
    tree: Arc<RwLock<FileTree>>,
    history: Arc<RwLock<History>>,
    registry: CommandRegistry,
    store: Option<Arc<dyn SnapshotStore>>,
}

impl Terminal {
    /// Starts a session, restoring state from the store when a usable
    /// snapshot exists. A missing or corrupt snapshot falls back to the
    /// default seed layout.
    pub async fn new(options: TerminalOptions) -> Self {
        let mut tree = FileTree::with_default_layout();
        let mut history = History::new(options.max_history);

        if let Some(store) = &options.store {
            if let Ok(Some(snapshot)) = store.load().await {
                if let Ok(restored) = FileTree::from_snapshot(&snapshot.tree, &snapshot.cwd) {
                    tree = restored;
                    for line in &snapshot.history {
                        history.push(line);
                    }
                }
            }
        }

        Self {
            tree: Arc::new(RwLock::new(tree)),
            history: Arc::new(RwLock::new(history)),
            registry: create_default_registry(),
            store: options.store,
        }
    }

    /// Runs one input line. `&&` chains commands and stops at the first
    /// nonzero exit code; the whole line is recorded in history as typed.
    pub async fn execute(&self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::success(String::new());
        }

        self.history.write().await.push(line);

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;

        for segment in line.split("&&") {
            let mut tokens = segment.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let name = name.to_lowercase();
            let args: Vec<String> = tokens.map(String::from).collect();

            let result = match self.registry.get(&name) {
                Some(cmd) => {
                    let ctx = CommandContext {
                        args,
                        tree: self.tree.clone(),
                        history: self.history.clone(),
                    };
                    cmd.execute(ctx).await
                }
                None => self.unknown_command(&name),
            };

            stdout.push_str(&result.stdout);
            stderr.push_str(&result.stderr);
            exit_code = result.exit_code;
            if exit_code != 0 {
                break;
            }
        }

        if let Some(store) = &self.store {
            if let Err(e) = self.save_snapshot(store.as_ref()).await {
                stderr.push_str(&format!("warning: failed to persist session: {e}\n"));
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }

    fn unknown_command(&self, name: &str) -> CommandResult {
        let mut stderr = format!("Command not found: {name}\n");
        if let Some(suggestion) = closest(self.registry.names(), name, SUGGESTION_THRESHOLD) {
            stderr.push_str(&format!("Did you mean \"{suggestion}\"?\n"));
        }
        CommandResult::with_exit_code(String::new(), stderr, 127)
    }

    async fn save_snapshot(
        &self,
        store: &dyn SnapshotStore,
    ) -> Result<(), crate::store::StoreError> {
        let snapshot = {
            let tree = self.tree.read().await;
            let history = self.history.read().await;
            SessionSnapshot {
                tree: tree.snapshot(),
                cwd: tree.current_path(),
                history: history.entries(),
            }
        };
        store.save(&snapshot).await
    }

    /// Most-recent-first matches for an incremental reverse search buffer.
    /// An empty buffer matches nothing.
    pub async fn search_history(&self, buffer: &str) -> Vec<String> {
        let mut matches = self.history.read().await.search(buffer);
        matches.reverse();
        matches
    }

    pub async fn current_path(&self) -> String {
        self.tree.read().await.current_path()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    async fn terminal() -> Terminal {
        Terminal::new(TerminalOptions::default()).await
    }

    #[tokio::test]
    async fn test_execute_simple_command() {
        let term = terminal().await;
        let result = term.execute("ls").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "home/\ndocs/\n");
    }

    #[tokio::test]
    async fn test_command_names_are_case_insensitive() {
        let term = terminal().await;
        let result = term.execute("LS /docs").await;
        assert_eq!(result.stdout, "readme.txt\n");
    }

    #[tokio::test]
    async fn test_chain_runs_in_order() {
        let term = terminal().await;
        let result = term.execute("mkdir /a && cd /a && pwd").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "/a\n");
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_failure() {
        let term = terminal().await;
        let result = term.execute("cd /nope && mkdir /never").await;
        assert_eq!(result.exit_code, 1);
        assert!(term.execute("ls /never").await.exit_code != 0);
    }

    #[tokio::test]
    async fn test_unknown_command_suggests() {
        let term = terminal().await;
        let result = term.execute("lls").await;
        assert_eq!(result.exit_code, 127);
        assert!(result.stderr.contains("Command not found: lls"));
        assert!(result.stderr.contains("Did you mean \"ls\"?"));
    }

    #[tokio::test]
    async fn test_unknown_command_far_from_everything() {
        let term = terminal().await;
        let result = term.execute("qqqqqqqqqqqq").await;
        assert_eq!(result.exit_code, 127);
        assert!(!result.stderr.contains("Did you mean"));
    }

    #[tokio::test]
    async fn test_unknown_command_breaks_chain() {
        let term = terminal().await;
        let result = term.execute("nope && mkdir /never").await;
        assert_eq!(result.exit_code, 127);
        assert!(term.execute("ls /never").await.exit_code != 0);
    }

    #[tokio::test]
    async fn test_blank_line_not_recorded() {
        let term = terminal().await;
        term.execute("   ").await;
        term.execute("pwd").await;
        let result = term.execute("history").await;
        assert_eq!(result.stdout, "    1  pwd\n    2  history\n");
    }

    #[tokio::test]
    async fn test_chained_line_recorded_as_one_entry() {
        let term = terminal().await;
        term.execute("mkdir /a && cd /a").await;
        let result = term.execute("history").await;
        assert!(result.stdout.starts_with("    1  mkdir /a && cd /a\n"));
    }

    #[tokio::test]
    async fn test_reverse_search_most_recent_first() {
        let term = terminal().await;
        term.execute("mkdir /a").await;
        term.execute("ls").await;
        term.execute("mkdir /b").await;
        let matches = term.search_history("mkdir").await;
        assert_eq!(matches, vec!["mkdir /b".to_string(), "mkdir /a".to_string()]);
        assert!(term.search_history("").await.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_saved_after_every_line() {
        let store = Arc::new(MemoryStore::new());
        let term = Terminal::new(TerminalOptions {
            store: Some(store.clone()),
            ..Default::default()
        })
        .await;
        term.execute("mkdir /persisted").await;
        term.execute("cd /persisted").await;
        assert_eq!(store.save_count().await, 2);

        let snapshot = store.load().await.unwrap().unwrap();
        assert_eq!(snapshot.cwd, "/persisted");
        assert_eq!(snapshot.history.len(), 2);
    }

    #[tokio::test]
    async fn test_session_restored_from_store() {
        let store = Arc::new(MemoryStore::new());
        {
            let term = Terminal::new(TerminalOptions {
                store: Some(store.clone()),
                ..Default::default()
            })
            .await;
            term.execute("mkdir /kept && cd /kept").await;
        }

        let term = Terminal::new(TerminalOptions {
            store: Some(store),
            ..Default::default()
        })
        .await;
        assert_eq!(term.current_path().await, "/kept");
        let result = term.execute("history").await;
        assert!(result.stdout.contains("mkdir /kept && cd /kept"));
    }
}
