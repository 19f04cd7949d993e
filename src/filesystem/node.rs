use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Children of a directory, keyed by the child's name.
///
/// Children sit behind an `Arc` so that a new filesystem value can share every
/// subtree it did not touch with the value it was derived from.
pub type Children = HashMap<String, Arc<Node>>;

/// What a node holds. Files carry content, directories carry children; never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: Children },
}

/// A single entry of the simulated tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
            created_at: now,
            modified_at: now,
        }
    }

    pub fn directory(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::Directory {
                children: HashMap::new(),
            },
            created_at: now,
            modified_at: now,
        }
    }

    /// The root directory. Its name is always empty.
    pub fn root(now: DateTime<Utc>) -> Self {
        Self::directory("", now)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&Children> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()?.get(name).map(Arc::as_ref)
    }

    /// Byte length of the content for files, `None` for directories.
    pub fn size(&self) -> Option<usize> {
        self.content().map(str::len)
    }

    /// Inserts `child` under its own name, replacing whatever was there.
    /// Returns `false` when this node is a file.
    pub fn insert_child(&mut self, child: Node) -> bool {
        match self.children_mut() {
            Some(children) => {
                children.insert(child.name.clone(), Arc::new(child));
                true
            }
            None => false,
        }
    }

    pub fn remove_child(&mut self, name: &str) -> Option<Arc<Node>> {
        self.children_mut()?.remove(name)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.modified_at = now;
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
