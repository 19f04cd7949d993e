use colored::Colorize;

use crate::shell::{DIRECTORY_MARKER_END, DIRECTORY_MARKER_START};

/// Replaces the directory markers in `output` with terminal styling, or drops
/// them when `color` is off.
pub fn render(output: &str, color: bool) -> String {
    let mut rendered = String::with_capacity(output.len());
    let mut rest = output;

    while let Some(start) = rest.find(DIRECTORY_MARKER_START) {
        rendered.push_str(&rest[..start]);
        let marked = &rest[start + DIRECTORY_MARKER_START.len()..];
        let (name, tail) = match marked.find(DIRECTORY_MARKER_END) {
            Some(end) => (&marked[..end], &marked[end + DIRECTORY_MARKER_END.len()..]),
            None => (marked, ""),
        };

        if color {
            rendered.push_str(&name.blue().bold().to_string());
        } else {
            rendered.push_str(name);
        }
        rest = tail;
    }

    rendered.push_str(rest);
    rendered
}
