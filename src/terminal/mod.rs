//! Terminal front-end around a [`Session`](crate::shell::Session).

mod render;
mod repl;

pub use repl::Terminal;
