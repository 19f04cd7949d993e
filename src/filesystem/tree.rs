use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::node::Node;
use super::path;

/// The whole simulated filesystem: the tree plus the working directory cursor.
///
/// Values are never edited after they have been handed out. Every change goes
/// through [`FileSystem::commit`] or [`FileSystem::with_current_path`], which
/// return a new value and leave `self` untouched. Cloning is cheap: the tree is
/// shared, and `commit` only copies the nodes between the root and the
/// directory it edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystem {
    root: Arc<Node>,
    current_path: Vec<String>,
    home: Vec<String>,
    version: u64,
    modified_at: DateTime<Utc>,
}

impl FileSystem {
    /// Builds a filesystem around `root` with the cursor at `home`.
    /// Falls back to the root as cursor if `home` is not a directory in the tree.
    pub fn new(root: Node, home: Vec<String>) -> Self {
        let modified_at = root.modified_at();
        let mut fs = FileSystem {
            root: Arc::new(root),
            current_path: Vec::new(),
            home: home.clone(),
            version: 0,
            modified_at,
        };
        if fs.is_directory_at(&home) {
            fs.current_path = home;
        } else {
            warn!(
                "Home directory {} does not exist, starting at the root",
                path::display(&home)
            );
        }
        fs
    }

    #[cfg(test)]
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    pub fn home(&self) -> &[String] {
        &self.home
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// The working directory as an absolute path, e.g. `/home/user`.
    pub fn display_path(&self) -> String {
        path::display(&self.current_path)
    }

    /// Walks from the root along `segments`.
    ///
    /// Returns `None` when a segment is missing or when a file is reached
    /// before the path is exhausted.
    pub fn node_at(&self, segments: &[String]) -> Option<&Node> {
        segments
            .iter()
            .try_fold(self.root.as_ref(), |node, segment| node.child(segment))
    }

    pub fn is_directory_at(&self, segments: &[String]) -> bool {
        self.node_at(segments).is_some_and(Node::is_directory)
    }

    /// The node the cursor points at, or the root if the cursor went stale.
    pub fn current_directory(&self) -> &Node {
        match self.node_at(&self.current_path) {
            Some(node) if node.is_directory() => node,
            _ => {
                warn!(
                    "Current path {} is not resolvable, falling back to the root",
                    self.display_path()
                );
                &self.root
            }
        }
    }

    /// Returns a copy with the cursor moved to `segments`.
    ///
    /// Callers check that `segments` names a directory; this only moves the
    /// cursor and never touches the tree.
    pub fn with_current_path(&self, segments: Vec<String>) -> FileSystem {
        FileSystem {
            current_path: segments,
            ..self.clone()
        }
    }

    /// Applies `mutator` to the current directory of a copy and returns the copy.
    ///
    /// The edited directory and the copy itself get a fresh modification time,
    /// and the version is bumped. `self` and every other value sharing its
    /// tree stay exactly as they were.
    pub fn commit(&self, mutator: impl FnOnce(&mut Node)) -> FileSystem {
        let now = Utc::now();
        let target: &[String] = if self.is_directory_at(&self.current_path) {
            &self.current_path
        } else {
            warn!(
                "Current path {} is not resolvable, committing at the root",
                self.display_path()
            );
            &[]
        };

        let mut next = self.clone();
        if let Some(directory) = descend_mut(Arc::make_mut(&mut next.root), target) {
            mutator(directory);
            directory.touch(now);
        }
        next.version += 1;
        next.modified_at = now;

        debug!(
            "Committed version {} at {}",
            next.version,
            path::display(target)
        );
        next
    }
}

/// Finds the node at `segments`, copying every shared node along the way so
/// that the returned reference is exclusively owned by the caller's tree.
fn descend_mut<'a>(node: &'a mut Node, segments: &[String]) -> Option<&'a mut Node> {
    match segments.split_first() {
        None => Some(node),
        Some((head, rest)) => {
            let child = node.children_mut()?.get_mut(head)?;
            descend_mut(Arc::make_mut(child), rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn segments(path: &str) -> Vec<String> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[fixture]
    fn fs() -> FileSystem {
        let now = DateTime::UNIX_EPOCH;
        let mut user = Node::directory("user", now);
        user.insert_child(Node::file("notes.txt", "hello", now));
        user.insert_child(Node::directory("docs", now));
        let mut home = Node::directory("home", now);
        home.insert_child(user);
        let mut root = Node::root(now);
        root.insert_child(home);
        root.insert_child(Node::directory("tmp", now));
        FileSystem::new(root, segments("home/user"))
    }

    #[rstest]
    fn starts_at_home(fs: FileSystem) {
        assert_eq!(fs.current_path(), segments("home/user").as_slice());
        assert_eq!(fs.display_path(), "/home/user");
        assert_eq!(fs.version(), 0);
    }

    #[test]
    fn missing_home_starts_at_root() {
        let fs = FileSystem::new(Node::root(Utc::now()), segments("home/nobody"));
        assert!(fs.current_path().is_empty());
        assert_eq!(fs.display_path(), "/");
    }

    #[rstest]
    #[case("", true)]
    #[case("home", true)]
    #[case("home/user/notes.txt", true)]
    #[case("home/user/missing", false)]
    #[case("home/user/notes.txt/deeper", false)]
    #[case("nope/user", false)]
    fn looks_up_nodes(fs: FileSystem, #[case] path: &str, #[case] found: bool) {
        assert_eq!(fs.node_at(&segments(path)).is_some(), found);
    }

    #[rstest]
    fn current_directory_follows_cursor(fs: FileSystem) {
        assert_eq!(fs.current_directory().name(), "user");
    }

    #[rstest]
    fn stale_cursor_falls_back_to_root(fs: FileSystem) {
        let stale = fs.with_current_path(segments("home/ghost"));
        assert_eq!(stale.current_directory().name(), "");
    }

    #[rstest]
    fn commit_leaves_previous_value_untouched(fs: FileSystem) {
        let before = fs.clone();
        let now = Utc::now();

        let after = fs.commit(|dir| {
            dir.insert_child(Node::file("new.txt", "data", now));
            dir.remove_child("notes.txt");
        });

        assert_eq!(fs, before);
        assert!(fs.node_at(&segments("home/user/notes.txt")).is_some());
        assert!(fs.node_at(&segments("home/user/new.txt")).is_none());

        assert!(after.node_at(&segments("home/user/notes.txt")).is_none());
        assert_eq!(
            after
                .node_at(&segments("home/user/new.txt"))
                .and_then(Node::content),
            Some("data")
        );
        assert_eq!(after.version(), fs.version() + 1);
    }

    #[rstest]
    fn commit_shares_untouched_subtrees(fs: FileSystem) {
        let after = fs.commit(|dir| {
            dir.insert_child(Node::directory("fresh", Utc::now()));
        });

        let old_tmp = fs.root().children().and_then(|c| c.get("tmp")).cloned();
        let new_tmp = after.root().children().and_then(|c| c.get("tmp")).cloned();
        assert!(matches!((old_tmp, new_tmp), (Some(a), Some(b)) if Arc::ptr_eq(&a, &b)));
    }

    #[rstest]
    fn commit_stamps_the_edited_directory(fs: FileSystem) {
        let before = fs.current_directory().modified_at();
        let after = fs.commit(|dir| {
            dir.insert_child(Node::file("x", "", Utc::now()));
        });
        assert_eq!(before, DateTime::UNIX_EPOCH);
        assert!(after.current_directory().modified_at() > before);
        assert!(after.modified_at() > fs.modified_at());
        assert_eq!(fs.current_directory().modified_at(), before);
    }

    #[rstest]
    fn commit_stamps_only_the_edited_directory(fs: FileSystem) {
        let after = fs.commit(|dir| {
            dir.insert_child(Node::file("x", "", Utc::now()));
        });
        let home = after.node_at(&segments("home")).expect("home exists");
        let notes = after
            .node_at(&segments("home/user/notes.txt"))
            .expect("notes exist");
        assert_eq!(home.modified_at(), DateTime::UNIX_EPOCH);
        assert_eq!(notes.modified_at(), DateTime::UNIX_EPOCH);
    }

    #[rstest]
    fn commit_on_stale_cursor_edits_root(fs: FileSystem) {
        let stale = fs.with_current_path(segments("home/ghost"));
        let after = stale.commit(|dir| {
            dir.insert_child(Node::file("orphan", "", Utc::now()));
        });
        assert!(after.node_at(&segments("orphan")).is_some());
    }

    #[rstest]
    fn moving_the_cursor_keeps_the_tree(fs: FileSystem) {
        let moved = fs.with_current_path(segments("tmp"));
        assert_eq!(moved.display_path(), "/tmp");
        assert_eq!(moved.root(), fs.root());
        assert_eq!(moved.version(), fs.version());
    }
}
