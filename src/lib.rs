//! memshell: an in-memory filesystem with a shell-style command layer.
//!
//! The crate is layered bottom-up:
//! - [`fs`]: the arena-backed tree and path resolution
//! - [`search`]: edit distance and the substring index
//! - [`history`]: bounded command history over the index
//! - [`commands`]: the built-in command set and registry
//! - [`store`]: session snapshot persistence
//! - [`terminal`]: the session that ties it all together

pub mod commands;
pub mod fs;
pub mod history;
pub mod search;
pub mod store;
pub mod terminal;

pub use commands::{Command, CommandContext, CommandResult};
pub use fs::{FileTree, FsError};
pub use history::History;
pub use store::{JsonFileStore, MemoryStore, SessionSnapshot, SnapshotStore};
pub use terminal::{Terminal, TerminalOptions};
