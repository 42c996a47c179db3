//! File System Types
//!
//! Error taxonomy and snapshot types for the virtual file system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File system errors. All are recoverable and carry the offending path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Is a directory: {path}")]
    IsADirectory { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Directory not empty: {path}")]
    DirectoryNotEmpty { path: String },

    #[error("Cannot remove root directory")]
    CannotRemoveRoot,

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Node kind in a serialized tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Directory,
    File,
}

/// One node of a serialized tree. Files carry `content`, directories carry
/// `children` (in listing order); the two are never both present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub kind: SnapshotKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Directory snapshot with the given children.
    pub fn directory(name: impl Into<String>, children: Vec<NodeSnapshot>) -> Self {
        Self {
            name: name.into(),
            kind: SnapshotKind::Directory,
            content: None,
            children,
        }
    }

    /// File snapshot with the given content.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SnapshotKind::File,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FsError::PathNotFound { path: "/a/b".to_string() };
        assert_eq!(err.to_string(), "Path not found: /a/b");

        let err = FsError::IsADirectory { path: "/docs".to_string() };
        assert_eq!(err.to_string(), "Is a directory: /docs");

        assert_eq!(FsError::CannotRemoveRoot.to_string(), "Cannot remove root directory");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snap = NodeSnapshot::directory(
            "/",
            vec![
                NodeSnapshot::directory("docs", vec![NodeSnapshot::file("readme.txt", "hi")]),
                NodeSnapshot::file("notes.md", ""),
            ],
        );

        let json = serde_json::to_string(&snap).unwrap();
        let parsed: NodeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);

        // Directories omit `content`, files omit `children`.
        assert!(!json.contains("\"content\":null"));
        assert!(json.contains("\"kind\":\"directory\""));
        assert!(json.contains("\"kind\":\"file\""));
    }
}
