//! Small path utilities

use std::path::{Component, Path, PathBuf};

/// Compute the relative path from a directory to a file, lexically.
///
/// Used for the `#include` directives the batch pipeline embeds in the
/// registration unit: the generated header must reference its source
/// headers relative to the output directory, wherever the tool was run
/// from. Neither path is required to exist.
pub fn relative_path(from_dir: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    relative
}

/// Render a path as an include directive string with forward slashes
pub fn include_directive(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
