//! Virtual file system: arena-backed tree, path resolution, snapshots.

pub mod tree;
pub mod types;

pub use tree::{FileTree, NodeId, SEPARATOR};
pub use types::{FsError, NodeSnapshot, SnapshotKind};
