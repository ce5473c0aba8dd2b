//! Capability-based file helpers shared by the StaySuite loaders and CLI.
//!
//! Every helper takes a UTF-8 path and resolves it against an ambient
//! directory handle from `cap-std`, so callers never touch `std::fs` directly.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the I/O error raised while opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 text file into memory.
///
/// # Errors
/// Returns an I/O error when the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the parent directory of `path` and return it alongside the file name.
///
/// # Errors
/// Fails when `path` has no file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the underlying I/O error, including `NotFound` for missing paths.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests fail fast on fixture errors")]

    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn reads_file_contents(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let path = root.join("catalog.json");
        std::fs::write(path.as_std_path(), "[]").expect("write fixture");
        assert_eq!(read_utf8_to_string(&path).expect("read"), "[]");
    }

    #[rstest]
    fn file_is_file_distinguishes_directories(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let file = root.join("rules.json");
        std::fs::write(file.as_std_path(), "{}").expect("write fixture");
        let nested = root.join("nested");
        std::fs::create_dir(nested.as_std_path()).expect("create dir");

        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&nested).expect("inspect dir"));
    }

    #[rstest]
    fn missing_file_reports_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
