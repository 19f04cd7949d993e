use std::sync::Arc;

use snafu::{OptionExt, ensure};
use tracing::debug;

use crate::ext::ListingDateExt;
use crate::filesystem::{FileSystem, Node, path};
use crate::shell::error::{CannotAccessSnafu, CannotChangeDirectorySnafu, CommandError, Reason};
use crate::shell::output::{
    CommandOutput, DIRECTORY_MARKER_END, DIRECTORY_MARKER_START, Transition,
};

pub fn pwd(fs: &FileSystem) -> Transition {
    Transition::unchanged(fs, CommandOutput::success(fs.display_path()))
}

pub fn ls(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let directory = match args.first().copied() {
        None => fs.current_directory(),
        Some(input) => {
            let node = fs
                .node_at(&path::resolve(fs.current_path(), input))
                .context(CannotAccessSnafu {
                    path: input,
                    reason: Reason::NotFound,
                })?;
            ensure!(
                node.is_directory(),
                CannotAccessSnafu {
                    path: input,
                    reason: Reason::NotADirectory,
                }
            );
            node
        }
    };

    Ok(Transition::unchanged(
        fs,
        CommandOutput::success(render_listing(directory)),
    ))
}

pub fn cd(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let (input, target) = match args.first().copied() {
        Some(input) => (input.to_string(), path::resolve(fs.current_path(), input)),
        None => (path::display(fs.home()), fs.home().to_vec()),
    };

    let node = fs.node_at(&target).context(CannotChangeDirectorySnafu {
        path: input.as_str(),
        reason: Reason::NotFound,
    })?;
    ensure!(
        node.is_directory(),
        CannotChangeDirectorySnafu {
            path: input.as_str(),
            reason: Reason::NotADirectory,
        }
    );

    debug!("Changing directory to {}", path::display(&target));
    Ok(Transition::silent(fs.with_current_path(target)))
}

/// One line per child: directories first, then by name in byte order.
fn render_listing(directory: &Node) -> String {
    let mut entries = directory
        .children()
        .into_iter()
        .flat_map(|children| children.values())
        .map(Arc::as_ref)
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name().cmp(b.name()))
    });

    entries
        .into_iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entry(node: &Node) -> String {
    let date = node.modified_at().to_listing_date();
    match node.size() {
        Some(size) => format!("-rw-r--r-- {:>8} {} {}", size, date, node.name()),
        None => format!(
            "drwxr-xr-x {:>8} {} {}{}/{}",
            "-",
            date,
            DIRECTORY_MARKER_START,
            node.name(),
            DIRECTORY_MARKER_END
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::Seed;
    use rstest::*;

    #[fixture]
    fn fs() -> FileSystem {
        Seed::default().build().expect("default seed should build")
    }

    fn names(listing: &str) -> Vec<String> {
        listing
            .lines()
            .filter_map(|line| line.rsplit(' ').next())
            .map(|name| {
                name.replace(DIRECTORY_MARKER_START, "")
                    .replace(DIRECTORY_MARKER_END, "")
            })
            .collect()
    }

    #[rstest]
    fn pwd_prints_the_cursor(fs: FileSystem) {
        assert_eq!(pwd(&fs).output, CommandOutput::success("/home/user"));
        let at_root = fs.with_current_path(Vec::new());
        assert_eq!(pwd(&at_root).output.output, "/");
    }

    #[rstest]
    fn ls_lists_directories_first(fs: FileSystem) {
        let transition = ls(&fs, &[]).expect("ls should succeed");
        assert!(!transition.output.error);
        assert_eq!(names(&transition.output.output), ["documents/", "welcome.txt"]);
    }

    #[rstest]
    fn ls_marks_directories_and_sizes_files(fs: FileSystem) {
        let listing = ls(&fs, &[]).expect("ls should succeed").output.output;
        let mut lines = listing.lines();

        let directory = lines.next().expect("directory line");
        assert!(directory.starts_with("drwxr-xr-x"));
        assert!(directory.ends_with(&format!(
            "{}documents/{}",
            DIRECTORY_MARKER_START, DIRECTORY_MARKER_END
        )));

        let file = lines.next().expect("file line");
        assert!(file.starts_with("-rw-r--r--"));
        let size = crate::filesystem::DEFAULT_WELCOME.len().to_string();
        assert!(file.split_whitespace().any(|field| field == size));
    }

    #[rstest]
    #[case("/", vec!["home/", "tmp/"])]
    #[case("..", vec!["user/"])]
    #[case("documents", vec![])]
    #[case("/home/user/./documents/..", vec!["documents/", "welcome.txt"])]
    fn ls_resolves_paths(fs: FileSystem, #[case] input: &str, #[case] expected: Vec<&str>) {
        let listing = ls(&fs, &[input]).expect("ls should succeed").output.output;
        assert_eq!(names(&listing), expected);
    }

    #[rstest]
    fn ls_of_empty_directory_is_empty(fs: FileSystem) {
        let transition = ls(&fs, &["/tmp"]).expect("ls should succeed");
        assert_eq!(transition.output, CommandOutput::success(""));
    }

    #[rstest]
    #[case("missing", "ls: cannot access 'missing': No such file or directory")]
    #[case("welcome.txt", "ls: cannot access 'welcome.txt': Not a directory")]
    #[case("welcome.txt/x", "ls: cannot access 'welcome.txt/x': No such file or directory")]
    fn ls_reports_bad_paths(fs: FileSystem, #[case] input: &str, #[case] message: &str) {
        let error = ls(&fs, &[input]).expect_err("ls should fail");
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    #[case("documents", "/home/user/documents")]
    #[case("/tmp", "/tmp")]
    #[case("..", "/home")]
    #[case("../../..", "/")]
    #[case(".", "/home/user")]
    fn cd_moves_the_cursor(fs: FileSystem, #[case] input: &str, #[case] expected: &str) {
        let transition = cd(&fs, &[input]).expect("cd should succeed");
        assert_eq!(transition.state.display_path(), expected);
        assert_eq!(transition.output, CommandOutput::default());
        assert_eq!(transition.state.version(), fs.version());
    }

    #[rstest]
    fn bare_cd_goes_home(fs: FileSystem) {
        let elsewhere = fs.with_current_path(vec!["tmp".to_string()]);
        let transition = cd(&elsewhere, &[]).expect("cd should succeed");
        assert_eq!(transition.state.display_path(), "/home/user");
    }

    #[rstest]
    #[case("/nope", "cd: /nope: No such file or directory")]
    #[case("welcome.txt", "cd: welcome.txt: Not a directory")]
    fn cd_reports_bad_paths(fs: FileSystem, #[case] input: &str, #[case] message: &str) {
        let error = cd(&fs, &[input]).expect_err("cd should fail");
        assert_eq!(error.to_string(), message);
    }
}
