//! In-memory filesystem tree with copy-on-write snapshots.
//!
//! A [`FileSystem`] value is an immutable snapshot: a tree of [`Node`]s plus
//! the working directory cursor. Changes produce new snapshots that share
//! every untouched subtree with their predecessor.

mod node;
pub mod path;
mod seed;
mod tree;

pub use node::Node;
pub use seed::{DEFAULT_USER, DEFAULT_WELCOME, Seed, SeedError};
pub use tree::FileSystem;
