//! Test case discovery
//!
//! Locates candidate test files by naming pattern and executability.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::trace;
use walkdir::WalkDir;

/// Substring that marks a file name as a test candidate. Matching is
/// case-sensitive, so `tests` and `my_test.sh` qualify while `Test` does not.
const TEST_NAME_TOKEN: &str = "test";

/// Returns true if the file's base name matches the test naming pattern.
pub fn matches_test_pattern(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(TEST_NAME_TOKEN))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Full candidate predicate: an existing regular file whose base name
/// matches the test pattern and which carries an execute permission bit.
///
/// The same predicate applies to discovered files and to files given
/// explicitly on the command line.
pub fn is_test_case(path: &Path) -> bool {
    path.is_file() && matches_test_pattern(path) && is_executable(path)
}

/// Walk `root` recursively and yield every file satisfying the candidate
/// predicate.
///
/// The traversal is exhaustive but its order is not guaranteed. Symlinks,
/// hidden files and special files get no special casing; directories are
/// never yielded. I/O errors during the walk (e.g. an unreadable
/// subdirectory) surface through the iterator.
pub fn discover(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root).into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            let path = entry.into_path();
            if is_test_case(&path) {
                trace!("discovered {}", path.display());
                Some(Ok(path))
            } else {
                None
            }
        }
        Err(e) => Some(Err(e.into())),
    })
}
