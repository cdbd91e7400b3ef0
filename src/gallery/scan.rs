//! Directory scanning for gallery candidates.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` recursively, yielding files whose name ends with `suffix`.
///
/// The suffix match is exact and case-sensitive ("photo.JPEG" does not
/// match ".jpeg"). The walk is lazy and restartable; calling this again
/// re-reads the tree from scratch. Traversal order is whatever the
/// filesystem reports, so callers must not rely on it for correctness.
pub fn scan_images<'a>(root: &Path, suffix: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix))
        })
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn finds_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpeg"));
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        touch(&dir.path().join("nested/b.jpeg"));
        touch(&dir.path().join("nested/deeper/c.jpeg"));

        let found: BTreeSet<_> = scan_images(dir.path(), ".jpeg").collect();
        assert_eq!(found.len(), 3);
        assert!(found.contains(&dir.path().join("nested/deeper/c.jpeg")));
    }

    #[test]
    fn suffix_match_is_exact_and_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep.jpeg"));
        touch(&dir.path().join("skip.jpg"));
        touch(&dir.path().join("skip.JPEG"));
        touch(&dir.path().join("skip.jpeg.txt"));
        touch(&dir.path().join("notes.txt"));

        let found: Vec<_> = scan_images(dir.path(), ".jpeg").collect();
        assert_eq!(found, vec![dir.path().join("keep.jpeg")]);
    }

    #[test]
    fn directories_matching_the_suffix_are_not_yielded() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.jpeg")).unwrap();
        touch(&dir.path().join("folder.jpeg/inner.jpeg"));

        let found: Vec<_> = scan_images(dir.path(), ".jpeg").collect();
        assert_eq!(found, vec![dir.path().join("folder.jpeg/inner.jpeg")]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(scan_images(dir.path(), ".jpeg").count(), 0);
    }
}
