//! Path canonicalization and root-relative rendering

use crate::error::SynthError;
use std::path::{Component, Path, PathBuf};

/// Default token that stands in for the scan root in relative paths.
pub const DEFAULT_PLACEHOLDER: &str = "[root]";

/// Canonicalize an existing directory, failing with `PathNotFound` otherwise.
///
/// Uses `dunce` so Windows paths come back without the verbatim prefix.
pub fn canonical_root(path: &Path) -> Result<PathBuf, SynthError> {
    if !path.is_dir() {
        return Err(SynthError::PathNotFound(path.to_path_buf()));
    }
    dunce::canonicalize(path).map_err(|e| SynthError::io(path, e))
}

/// Render `path` with the `root` prefix replaced by `placeholder`, using `/` separators.
///
/// Paths outside `root` are returned as-is (separators normalized).
pub fn relative_to_placeholder(path: &Path, root: &Path, placeholder: &str) -> String {
    match path.strip_prefix(root) {
        Ok(rest) => {
            let mut out = placeholder.to_string();
            for part in components_of(rest) {
                out.push('/');
                out.push_str(&part);
            }
            out
        }
        Err(_) => normalize_separators(&path.to_string_lossy()),
    }
}

/// Map a placeholder-relative path back under `root`.
///
/// Returns `None` when `relative` does not start with `placeholder`, or when
/// any part after it is not a plain name (`..`, `.`, a root or a drive prefix),
/// so the result always stays under `root`.
pub fn resolve_placeholder(relative: &str, root: &Path, placeholder: &str) -> Option<PathBuf> {
    let rest = relative.strip_prefix(placeholder)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return None;
    }
    let mut out = root.to_path_buf();
    for part in rest.split('/').filter(|p| !p.is_empty()) {
        let mut components = Path::new(part).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => out.push(name),
            _ => return None,
        }
    }
    Some(out)
}

fn components_of(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
