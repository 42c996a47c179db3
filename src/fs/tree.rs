//! In-Memory File Tree
//!
//! The node graph behind the virtual terminal: an arena of nodes addressed
//! by stable indices, with non-owning parent back-references. Path
//! resolution is a pure read; every mutating operation validates its
//! arguments and either applies fully or fails with a typed [`FsError`].

use indexmap::IndexMap;

use super::types::{FsError, NodeSnapshot, SnapshotKind};

pub const SEPARATOR: char = '/';

/// Default readme seeded into a fresh tree.
const SEED_README: &str = "Welcome to the memshell filesystem!";

/// Stable handle into the arena. Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    Directory { children: IndexMap<String, NodeId> },
    File { content: String },
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    fn tombstone() -> Self {
        Node {
            name: String::new(),
            parent: None,
            kind: NodeKind::File { content: String::new() },
        }
    }
}

/// A hierarchical path-addressable tree of directories and files, entirely
/// in memory. Owns the current-directory cursor, which always points at a
/// live directory reachable from the root.
#[derive(Debug)]
pub struct FileTree {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: NodeId,
    cwd: NodeId,
}

impl FileTree {
    /// Create a tree containing only the root directory.
    pub fn new() -> Self {
        let root = Node {
            name: String::from("/"),
            parent: None,
            kind: NodeKind::Directory { children: IndexMap::new() },
        };
        Self {
            nodes: vec![root],
            free: Vec::new(),
            root: NodeId(0),
            cwd: NodeId(0),
        }
    }

    /// Create a tree with the default seed layout.
    pub fn with_default_layout() -> Self {
        let mut tree = Self::new();
        tree.seed_defaults();
        tree
    }

    /// Create the seed directories and files, leaving anything that already
    /// exists untouched. Infallible on a well-formed tree: the seed paths
    /// never cross an existing file.
    pub fn seed_defaults(&mut self) {
        let _ = self.make_directory("/home");
        let _ = self.make_directory("/docs");
        if self.resolve("/docs/readme.txt").is_err() {
            let _ = self.write_file("/docs/readme.txt", SEED_README);
        }
    }

    /// Replace the whole tree with a fresh seeded one and move the cursor
    /// back to the root.
    pub fn reset(&mut self) {
        *self = Self::with_default_layout();
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                NodeId(slot)
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn is_directory(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Directory { .. })
    }

    fn child_of(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        match &self.node(parent).kind {
            NodeKind::Directory { children } => children.get(name).copied(),
            NodeKind::File { .. } => None,
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.node(id).parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    // ------------------------------------------------------------------
    // Path resolution
    // ------------------------------------------------------------------

    /// Resolve a path to a node without mutating anything.
    ///
    /// The empty path resolves to the current directory. A leading separator
    /// resolves from the root, anything else from the current directory.
    /// `.` and empty segments are no-ops; `..` moves to the parent and is a
    /// no-op at the root.
    pub fn resolve(&self, path: &str) -> Result<NodeId, FsError> {
        if path.is_empty() {
            return Ok(self.cwd);
        }
        let mut current = if path.starts_with(SEPARATOR) { self.root } else { self.cwd };
        for segment in path.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = self.node(current).parent {
                        current = parent;
                    }
                }
                name => {
                    let NodeKind::Directory { children } = &self.node(current).kind else {
                        return Err(FsError::NotADirectory { path: path.to_string() });
                    };
                    current = children
                        .get(name)
                        .copied()
                        .ok_or_else(|| FsError::PathNotFound { path: path.to_string() })?;
                }
            }
        }
        Ok(current)
    }

    /// Split `path` into its final segment and the directory holding it,
    /// resolving the directory prefix. Fails with `NotADirectory` when the
    /// prefix names a file, and with `InvalidArgument` when the final
    /// segment is empty or a dot segment.
    fn resolve_parent<'a>(&self, path: &'a str) -> Result<(NodeId, &'a str), FsError> {
        let (parent_path, name) = match path.rfind(SEPARATOR) {
            Some(0) => ("/", &path[1..]),
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => ("", path),
        };
        if name.is_empty() || name == "." || name == ".." {
            return Err(FsError::InvalidArgument {
                reason: format!("invalid name in path: {path}"),
            });
        }
        let parent = self.resolve(parent_path)?;
        if !self.is_directory(parent) {
            return Err(FsError::NotADirectory { path: parent_path.to_string() });
        }
        Ok((parent, name))
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Create every missing segment along `path` as a directory. Existing
    /// directories along the way are left untouched; an existing file at any
    /// segment is an error.
    pub fn make_directory(&mut self, path: &str) -> Result<(), FsError> {
        if path.trim().is_empty() {
            return Err(FsError::InvalidArgument { reason: "missing directory name".to_string() });
        }
        let mut current = if path.starts_with(SEPARATOR) { self.root } else { self.cwd };
        for segment in path.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = self.node(current).parent {
                        current = parent;
                    }
                }
                name => {
                    match self.child_of(current, name) {
                        Some(child) => {
                            if !self.is_directory(child) {
                                return Err(FsError::NotADirectory { path: path.to_string() });
                            }
                            current = child;
                        }
                        None => {
                            let child = self.alloc(Node {
                                name: name.to_string(),
                                parent: Some(current),
                                kind: NodeKind::Directory { children: IndexMap::new() },
                            });
                            if let NodeKind::Directory { children } = &mut self.nodes[current.0].kind {
                                children.insert(name.to_string(), child);
                            }
                            current = child;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Move the current-directory cursor. `/` always returns to the root.
    pub fn change_directory(&mut self, path: &str) -> Result<(), FsError> {
        if path == "/" {
            self.cwd = self.root;
            return Ok(());
        }
        let target = self.resolve(path)?;
        if !self.is_directory(target) {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        self.cwd = target;
        Ok(())
    }

    /// List a directory's children in insertion order, directories suffixed
    /// with the separator. Listing a file yields its own name.
    pub fn list(&self, path: &str) -> Result<Vec<String>, FsError> {
        let target = self.resolve(path)?;
        match &self.node(target).kind {
            NodeKind::File { .. } => Ok(vec![self.node(target).name.clone()]),
            NodeKind::Directory { children } => Ok(children
                .iter()
                .map(|(name, id)| {
                    if self.is_directory(*id) {
                        format!("{name}{SEPARATOR}")
                    } else {
                        name.clone()
                    }
                })
                .collect()),
        }
    }

    /// Detach a single file.
    pub fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path)?;
        let child = self
            .child_of(parent, name)
            .ok_or_else(|| FsError::FileNotFound { path: path.to_string() })?;
        if self.is_directory(child) {
            return Err(FsError::IsADirectory { path: path.to_string() });
        }
        self.detach(child);
        Ok(())
    }

    /// Detach an empty directory. The root is never removable.
    pub fn remove_empty_directory(&mut self, path: &str) -> Result<(), FsError> {
        let target = self.resolve(path)?;
        match &self.node(target).kind {
            NodeKind::File { .. } => {
                return Err(FsError::NotADirectory { path: path.to_string() });
            }
            NodeKind::Directory { children } => {
                if !children.is_empty() {
                    return Err(FsError::DirectoryNotEmpty { path: path.to_string() });
                }
            }
        }
        if target == self.root {
            return Err(FsError::CannotRemoveRoot);
        }
        self.detach(target);
        Ok(())
    }

    /// Detach a node and its entire subtree unconditionally. The root is
    /// still protected.
    pub fn remove_recursive(&mut self, path: &str) -> Result<(), FsError> {
        let target = self.resolve(path)?;
        if target == self.root {
            return Err(FsError::CannotRemoveRoot);
        }
        self.detach(target);
        Ok(())
    }

    /// Create a file, or overwrite its content if it already exists. The
    /// parent prefix of the path must name an existing directory.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path)?;
        match self.child_of(parent, name) {
            Some(child) => match &mut self.nodes[child.0].kind {
                NodeKind::File { content: existing } => {
                    *existing = content.to_string();
                }
                NodeKind::Directory { .. } => {
                    return Err(FsError::IsADirectory { path: path.to_string() });
                }
            },
            None => {
                let child = self.alloc(Node {
                    name: name.to_string(),
                    parent: Some(parent),
                    kind: NodeKind::File { content: content.to_string() },
                });
                let name = self.node(child).name.clone();
                if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
                    children.insert(name, child);
                }
            }
        }
        Ok(())
    }

    /// Create an empty file if `path` does not exist yet; an existing file
    /// is left untouched.
    pub fn create_file(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path)?;
        if self.child_of(parent, name).is_some() {
            return Ok(());
        }
        self.write_file(path, "")
    }

    /// Return a file's content.
    pub fn read_file(&self, path: &str) -> Result<String, FsError> {
        let target = self.resolve(path)?;
        match &self.node(target).kind {
            NodeKind::File { content } => Ok(content.clone()),
            NodeKind::Directory { .. } => Err(FsError::IsADirectory { path: path.to_string() }),
        }
    }

    /// Absolute path of a node, `/` for the root itself.
    pub fn absolute_path(&self, id: NodeId) -> String {
        if id == self.root {
            return String::from("/");
        }
        let mut parts = Vec::new();
        let mut current = id;
        while current != self.root {
            parts.push(self.node(current).name.clone());
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.absolute_path(self.cwd)
    }

    /// Render the whole tree as box-drawing display lines, depth-first. The
    /// root itself is not printed; directory names end with the separator.
    pub fn render_tree(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_children(self.root, "", &mut lines);
        lines
    }

    fn render_children(&self, id: NodeId, prefix: &str, lines: &mut Vec<String>) {
        let NodeKind::Directory { children } = &self.node(id).kind else {
            return;
        };
        let count = children.len();
        for (index, (name, child)) in children.iter().enumerate() {
            let is_last = index == count - 1;
            let connector = if is_last { "└── " } else { "├── " };
            let suffix = if self.is_directory(*child) { "/" } else { "" };
            lines.push(format!("{prefix}{connector}{name}{suffix}"));
            if self.is_directory(*child) {
                let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                self.render_children(*child, &child_prefix, lines);
            }
        }
    }

    /// Absolute paths of every file under `path`, depth-first.
    pub fn all_file_paths(&self, path: &str) -> Result<Vec<String>, FsError> {
        let target = self.resolve(path)?;
        let mut paths = Vec::new();
        self.collect_file_paths(target, &mut paths);
        Ok(paths)
    }

    fn collect_file_paths(&self, id: NodeId, paths: &mut Vec<String>) {
        match &self.node(id).kind {
            NodeKind::File { .. } => paths.push(self.absolute_path(id)),
            NodeKind::Directory { children } => {
                for child in children.values() {
                    self.collect_file_paths(*child, paths);
                }
            }
        }
    }

    /// Detach `id` from its parent and free the whole subtree. If the cursor
    /// was inside the subtree it moves to the detached node's parent, so it
    /// never dangles.
    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        if self.is_ancestor_or_self(id, self.cwd) {
            self.cwd = parent;
        }
        let name = self.node(id).name.clone();
        if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
            children.shift_remove(&name);
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let NodeKind::Directory { children } = &self.node(current).kind {
                stack.extend(children.values().copied());
            }
            self.nodes[current.0] = Node::tombstone();
            self.free.push(current.0);
        }
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Serialize the whole tree.
    pub fn snapshot(&self) -> NodeSnapshot {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, id: NodeId) -> NodeSnapshot {
        let node = self.node(id);
        match &node.kind {
            NodeKind::File { content } => NodeSnapshot::file(node.name.clone(), content.clone()),
            NodeKind::Directory { children } => NodeSnapshot::directory(
                node.name.clone(),
                children.values().map(|child| self.snapshot_node(*child)).collect(),
            ),
        }
    }

    /// Rebuild a tree from a snapshot and restore the cursor to `cwd`. If
    /// the stored cursor path no longer names a directory, the cursor falls
    /// back to the root.
    pub fn from_snapshot(snapshot: &NodeSnapshot, cwd: &str) -> Result<Self, FsError> {
        if snapshot.kind != SnapshotKind::Directory {
            return Err(FsError::InvalidArgument {
                reason: "snapshot root must be a directory".to_string(),
            });
        }
        let mut tree = Self::new();
        for child in &snapshot.children {
            tree.restore_node(tree.root, child)?;
        }
        if tree.change_directory(cwd).is_err() {
            tree.cwd = tree.root;
        }
        Ok(tree)
    }

    fn restore_node(&mut self, parent: NodeId, snapshot: &NodeSnapshot) -> Result<(), FsError> {
        if snapshot.name.is_empty() || snapshot.name.contains(SEPARATOR) {
            return Err(FsError::InvalidArgument {
                reason: format!("invalid node name in snapshot: {:?}", snapshot.name),
            });
        }
        let kind = match snapshot.kind {
            SnapshotKind::File => {
                if !snapshot.children.is_empty() {
                    return Err(FsError::InvalidArgument {
                        reason: format!("file snapshot {:?} has children", snapshot.name),
                    });
                }
                NodeKind::File { content: snapshot.content.clone().unwrap_or_default() }
            }
            SnapshotKind::Directory => NodeKind::Directory { children: IndexMap::new() },
        };
        let id = self.alloc(Node {
            name: snapshot.name.clone(),
            parent: Some(parent),
            kind,
        });
        if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
            children.insert(snapshot.name.clone(), id);
        }
        if snapshot.kind == SnapshotKind::Directory {
            for child in &snapshot.children {
                self.restore_node(id, child)?;
            }
        }
        Ok(())
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::with_default_layout()
    }
}

// ============================================================================
// Tests
// ============================================================================
