/// Resolves `input` against `current` into an absolute list of segments.
///
/// Absolute inputs ignore `current`. Empty segments and `.` are dropped, `..`
/// pops one segment and stops silently at the root. Nothing is checked for
/// existence here.
pub fn resolve(current: &[String], input: &str) -> Vec<String> {
    let mut segments = if input.starts_with('/') {
        Vec::new()
    } else {
        current.to_vec()
    };

    for segment in input.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name.to_string()),
        }
    }

    segments
}

/// Renders segments as an absolute path, `/` for the root.
pub fn display(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}
