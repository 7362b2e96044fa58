//! Capability-based filesystem helpers for the roadlog CLI.
//!
//! Request files are read and reports written through `cap-std` directory
//! handles opened with ambient authority, using `camino` UTF-8 paths
//! throughout.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::Component;

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
///
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) the file at `path`, creating missing parent
/// directories first.
///
/// # Errors
///
/// Returns an IO error when a parent directory or the file cannot be created,
/// or when `path` has no file name.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Open the directory containing `path` and return it with the file name.
///
/// # Errors
///
/// Returns an IO error when the parent directory cannot be opened or `path`
/// has no file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path {path} has no file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns an IO error, including `NotFound`, when the path cannot be
/// inspected.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Ensure the parent directory of `path` exists.
///
/// Absolute paths are split at their root so `cap-std` only ever creates
/// relative paths beneath an opened directory.
///
/// # Errors
///
/// Returns an IO error when a directory cannot be opened or created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

/// Split a parent path into an ambient base directory and a relative suffix.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::{Read, Write};
    use tempfile::TempDir;

    struct Workspace {
        _dir: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Workspace { _dir: dir, root }
    }

    #[rstest]
    fn open_reads_existing_files(workspace: Workspace) {
        let path = workspace.root.join("request.json");
        std::fs::write(&path, "{\"total_miles\": 500}").expect("write request");

        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open")
            .read_to_string(&mut contents)
            .expect("read");

        assert_eq!(contents, "{\"total_miles\": 500}");
    }

    #[rstest]
    fn file_is_file_distinguishes_directories(workspace: Workspace) {
        let file = workspace.root.join("request.json");
        std::fs::write(&file, "{}").expect("write request");

        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&workspace.root).expect("inspect dir"));
    }

    #[rstest]
    fn file_is_file_reports_missing_paths(workspace: Workspace) {
        let err = file_is_file(&workspace.root.join("missing.json")).expect_err("missing");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn create_makes_missing_parents(workspace: Workspace) {
        let path = workspace.root.join("reports/2024/trip.txt");

        let mut file = create_utf8_file(&path).expect("create");
        file.write_all(b"Day 1").expect("write");
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "Day 1");
    }

    #[rstest]
    fn open_dir_and_file_requires_a_file_name() {
        let err = open_dir_and_file(Utf8Path::new("/")).expect_err("no file name");
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
