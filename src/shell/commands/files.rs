//! Commands that act on direct children of the working directory.
//!
//! Arguments are taken as literal child names, no path resolution happens here.

use std::sync::Arc;

use chrono::Utc;
use snafu::{OptionExt, ensure};
use tracing::info;

use crate::filesystem::{FileSystem, Node};
use crate::shell::Command;
use crate::shell::error::{
    CannotCreateDirectorySnafu, CannotCreateFileSnafu, CannotMoveSnafu, CannotReadSnafu,
    CannotRemoveDirectorySnafu, CannotRemoveSnafu, CannotStatSnafu, CommandError,
    MissingFileOperandSnafu, MissingOperandSnafu, OmittingDirectorySnafu, Reason,
};
use crate::shell::output::{CommandOutput, Transition};

pub fn mkdir(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let name = args.first().copied().context(MissingOperandSnafu {
        command: Command::Mkdir,
    })?;
    let children = fs
        .current_directory()
        .children()
        .context(CannotCreateDirectorySnafu {
            name,
            reason: Reason::PermissionDenied,
        })?;
    ensure!(
        !children.contains_key(name),
        CannotCreateDirectorySnafu {
            name,
            reason: Reason::FileExists,
        }
    );

    let now = Utc::now();
    let next = fs.commit(|directory| {
        directory.insert_child(Node::directory(name, now));
    });
    info!("Created directory '{}' in {}", name, next.display_path());
    Ok(Transition::silent(next))
}

pub fn touch(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let name = args.first().copied().context(MissingFileOperandSnafu {
        command: Command::Touch,
    })?;
    let exists = fs.current_directory().child(name).is_some();

    let now = Utc::now();
    let next = fs.commit(|directory| {
        if !exists {
            directory.insert_child(Node::file(name, "", now));
        } else if let Some(child) = directory
            .children_mut()
            .and_then(|children| children.get_mut(name))
        {
            Arc::make_mut(child).touch(now);
        }
    });
    info!(
        "{} '{}' in {}",
        if exists { "Touched" } else { "Created file" },
        name,
        next.display_path()
    );
    Ok(Transition::silent(next))
}

pub fn rm(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let name = args.first().copied().context(MissingOperandSnafu {
        command: Command::Rm,
    })?;
    let target = fs
        .current_directory()
        .child(name)
        .context(CannotRemoveSnafu {
            name,
            reason: Reason::NotFound,
        })?;
    ensure!(
        target.is_file(),
        CannotRemoveSnafu {
            name,
            reason: Reason::IsADirectory,
        }
    );

    let next = fs.commit(|directory| {
        directory.remove_child(name);
    });
    info!("Removed file '{}' from {}", name, next.display_path());
    Ok(Transition::silent(next))
}

pub fn rmdir(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let name = args.first().copied().context(MissingOperandSnafu {
        command: Command::Rmdir,
    })?;
    let target = fs
        .current_directory()
        .child(name)
        .context(CannotRemoveDirectorySnafu {
            name,
            reason: Reason::NotFound,
        })?;
    let children = target.children().context(CannotRemoveDirectorySnafu {
        name,
        reason: Reason::NotADirectory,
    })?;
    ensure!(
        children.is_empty(),
        CannotRemoveDirectorySnafu {
            name,
            reason: Reason::DirectoryNotEmpty,
        }
    );

    let next = fs.commit(|directory| {
        directory.remove_child(name);
    });
    info!("Removed directory '{}' from {}", name, next.display_path());
    Ok(Transition::silent(next))
}

pub fn cat(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let name = args.first().copied().context(MissingFileOperandSnafu {
        command: Command::Cat,
    })?;
    let target = fs
        .current_directory()
        .child(name)
        .context(CannotReadSnafu {
            name,
            reason: Reason::NotFound,
        })?;
    let content = target.content().context(CannotReadSnafu {
        name,
        reason: Reason::IsADirectory,
    })?;

    Ok(Transition::unchanged(fs, CommandOutput::success(content)))
}

pub fn mv(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let (from, to) = two_operands(args, Command::Mv)?;
    let directory = fs.current_directory();
    ensure!(
        directory.child(from).is_some(),
        CannotStatSnafu {
            command: Command::Mv,
            name: from,
        }
    );
    ensure!(directory.child(to).is_none(), CannotMoveSnafu { from, to });

    let next = fs.commit(|directory| {
        if let Some(children) = directory.children_mut() {
            if let Some(mut node) = children.remove(from) {
                Arc::make_mut(&mut node).rename(to);
                children.insert(to.to_string(), node);
            }
        }
    });
    info!("Moved '{}' to '{}' in {}", from, to, next.display_path());
    Ok(Transition::silent(next))
}

pub fn cp(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let (from, to) = two_operands(args, Command::Cp)?;
    let directory = fs.current_directory();
    let source = directory.child(from).context(CannotStatSnafu {
        command: Command::Cp,
        name: from,
    })?;
    let content = source
        .content()
        .context(OmittingDirectorySnafu { name: from })?
        .to_string();
    ensure!(
        directory.child(to).is_none(),
        CannotCreateFileSnafu { name: to }
    );

    let now = Utc::now();
    let next = fs.commit(|directory| {
        directory.insert_child(Node::file(to, content, now));
    });
    info!("Copied '{}' to '{}' in {}", from, to, next.display_path());
    Ok(Transition::silent(next))
}

fn two_operands<'a>(
    args: &[&'a str],
    command: Command,
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        [from, to, ..] => Ok((*from, *to)),
        _ => MissingFileOperandSnafu { command }.fail(),
    }
}
