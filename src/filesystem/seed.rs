use std::sync::Arc;

use chrono::{DateTime, Utc};
use snafu::{Snafu, ensure};
use tracing::debug;

use super::node::Node;
use super::path;
use super::tree::FileSystem;

pub const DEFAULT_USER: &str = "user";

pub const DEFAULT_WELCOME: &str = "Welcome to the terminal!\n\
This is a simulated shell running entirely in memory.\n\
Type 'help' to see the available commands.\n";

/// Describes the tree a session starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub user: String,
    pub welcome: String,
    /// Extra files as (path, content). Relative paths are taken from the home directory.
    pub files: Vec<(String, String)>,
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            user: DEFAULT_USER.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            files: Vec::new(),
        }
    }
}

impl Seed {
    pub fn home(&self) -> Vec<String> {
        vec!["home".to_string(), self.user.clone()]
    }

    /// Builds `/home/<user>/{welcome.txt, documents/}` and `/tmp/`, then adds the extra files.
    pub fn build(&self) -> Result<FileSystem, SeedError> {
        let now = Utc::now();
        let home = self.home();

        let mut root = Node::root(now);
        try_insert_file(&mut root, &home, "welcome.txt", &self.welcome, now)?;
        try_insert_directory(&mut root, &home, "documents", now)?;
        try_insert_directory(&mut root, &[], "tmp", now)?;

        for (file_path, content) in &self.files {
            let mut segments = path::resolve(&home, file_path);
            let name = segments.pop().ok_or_else(|| SeedError::EmptyPath {
                path: file_path.clone(),
            })?;
            debug!("Seeding {}/{}", path::display(&segments), name);
            try_insert_file(&mut root, &segments, &name, content, now)?;
        }

        Ok(FileSystem::new(root, home))
    }
}

/// Walks `parent` from `root`, creating missing directories, and returns the
/// directory reached.
fn ensure_directory<'a>(
    root: &'a mut Node,
    parent: &[String],
    now: DateTime<Utc>,
) -> Result<&'a mut Node, SeedError> {
    let mut current = root;
    for (depth, segment) in parent.iter().enumerate() {
        let children = match current.children_mut() {
            Some(children) => children,
            None => {
                return CannotInsertIntoFileSnafu {
                    path: path::display(&parent[..depth]),
                }
                .fail();
            }
        };
        let child = children
            .entry(segment.clone())
            .or_insert_with(|| Node::directory(segment.clone(), now).into());
        current = Arc::make_mut(child);
    }

    ensure!(
        current.is_directory(),
        CannotInsertIntoFileSnafu {
            path: path::display(parent),
        }
    );
    Ok(current)
}

fn try_insert_file(
    root: &mut Node,
    parent: &[String],
    name: &str,
    content: &str,
    now: DateTime<Utc>,
) -> Result<(), SeedError> {
    let directory = ensure_directory(root, parent, now)?;
    ensure!(
        !directory.child(name).is_some_and(Node::is_directory),
        TargetIsDirectorySnafu {
            path: format!("{}/{}", path::display(parent).trim_end_matches('/'), name),
        }
    );
    directory.insert_child(Node::file(name, content, now));
    Ok(())
}

fn try_insert_directory(
    root: &mut Node,
    parent: &[String],
    name: &str,
    now: DateTime<Utc>,
) -> Result<(), SeedError> {
    let directory = ensure_directory(root, parent, now)?;
    if directory.child(name).is_none() {
        directory.insert_child(Node::directory(name, now));
    }
    Ok(())
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SeedError {
    #[snafu(display("Cannot insert below {}: it is a file", path))]
    CannotInsertIntoFile { path: String },
    #[snafu(display("Cannot replace directory {} with a file", path))]
    TargetIsDirectory { path: String },
    #[snafu(display("Seed path '{}' does not name a file", path))]
    EmptyPath { path: String },
}
