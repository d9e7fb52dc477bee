//! Deterministic scratch-file paths derived from a canonical target path
//!
//! Conversion output lands on a temp path first so a failed run can never
//! clobber a valid pre-existing description file.

use std::path::{Path, PathBuf};

/// Marker inserted before the extension of derived temp paths
pub const TEMP_MARKER: &str = ".temp";

/// Derive a temp path alongside `path` by inserting the temp marker before
/// the file extension.
///
/// `new_ext` (given with its leading dot) substitutes the original extension;
/// when omitted, the original extension is kept. Pure and deterministic for a
/// given input pair.
pub fn make_temp_path(path: &Path, new_ext: Option<&str>) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&file_name);

    let temp_name = format!("{stem}{TEMP_MARKER}{}", new_ext.unwrap_or(ext));
    path.with_file_name(temp_name)
}

/// Split a file name into stem and extension (including the leading dot).
/// A dot in position zero marks a hidden file, not an extension separator.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_original_extension() {
        assert_eq!(
            make_temp_path(Path::new("a/b.txt"), None),
            PathBuf::from("a/b.temp.txt")
        );
    }

    #[test]
    fn test_substitutes_new_extension() {
        assert_eq!(
            make_temp_path(Path::new("a/b.txt"), Some(".rst")),
            PathBuf::from("a/b.temp.rst")
        );
    }

    #[test]
    fn test_extensionless_file_gains_only_marker() {
        assert_eq!(
            make_temp_path(Path::new("LICENSE"), None),
            PathBuf::from("LICENSE.temp")
        );
    }

    #[test]
    fn test_splits_at_last_dot() {
        assert_eq!(
            make_temp_path(Path::new("dist/pkg.tar.gz"), None),
            PathBuf::from("dist/pkg.temp.gz")
        );
    }

    #[test]
    fn test_hidden_file_has_no_extension() {
        assert_eq!(
            make_temp_path(Path::new(".hidden"), None),
            PathBuf::from(".hidden.temp")
        );
    }

    #[test]
    fn test_deterministic() {
        let a = make_temp_path(Path::new("setup_description.rst"), Some(".md"));
        let b = make_temp_path(Path::new("setup_description.rst"), Some(".md"));
        assert_eq!(a, b);
        assert_eq!(a, PathBuf::from("setup_description.temp.md"));
    }

    #[test]
    fn test_preserves_parent_directory() {
        assert_eq!(
            make_temp_path(Path::new("/srv/pkg/setup_description.rst"), None),
            PathBuf::from("/srv/pkg/setup_description.temp.rst")
        );
    }
}
