//! Atomic file writes for generated fixtures.
//!
//! Output goes to a hidden temporary file in the target directory and is
//! then renamed over the target, so readers never observe a partial file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::RegistryError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir` atomically.
///
/// `file_name` must be a single normal path component.
///
/// # Errors
///
/// Returns [`RegistryError::WriteError`] if the file cannot be written.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &str,
) -> Result<(), RegistryError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(name)), None) = (components.next(), components.next()) else {
        return Err(RegistryError::WriteError {
            path: file_name.to_path_buf(),
            message: "output path must name a file".to_owned(),
        });
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{name}.tmp.{}.{suffix}.{counter}", std::process::id());

    write_temp(dir, &tmp_name, file_name, contents)?;
    if let Err(err) = rename_into_place(dir, &tmp_name, name) {
        if dir.remove_file(&tmp_name).is_err() {
            // Ignore cleanup failures.
        }
        return Err(write_error(file_name, &err));
    }
    sync_directory(dir);

    Ok(())
}

fn write_temp(
    dir: &Dir,
    tmp_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), RegistryError> {
    let tmp_path = target.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| write_error(&tmp_path, &err))?;

    if let Err(err) = file.write_all(contents.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(&tmp_path, &err));
    }

    Ok(())
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn write_error(path: &Utf8Path, err: &io::Error) -> RegistryError {
    RegistryError::WriteError {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn sync_directory(dir: &Dir) {
    // Best-effort directory sync; ignore failures.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;

    use super::*;

    fn scratch_dir(label: &str) -> (camino::Utf8PathBuf, Dir) {
        let path = camino::Utf8PathBuf::from("target")
            .join("tax-fixtures-unit")
            .join(format!("{label}-{}", std::process::id()));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        let dir = Dir::open_ambient_dir(&path, ambient_authority()).expect("open scratch dir");
        (path, dir)
    }

    #[test]
    fn writes_and_replaces_file() {
        let (path, dir) = scratch_dir("replace");
        let file = Utf8Path::new("fixtures.json");

        write_atomic(&dir, file, "[1]").expect("first write");
        write_atomic(&dir, file, "[2]").expect("second write");

        assert_eq!(dir.read_to_string(file).expect("read back"), "[2]");
        drop(std::fs::remove_dir_all(path));
    }

    #[test]
    fn replacing_leaves_no_temp_files() {
        let (path, dir) = scratch_dir("no-temp");
        let file = Utf8Path::new("batch.json");

        write_atomic(&dir, file, "[]").expect("first write");
        write_atomic(&dir, file, "[{}]").expect("overwrite");

        let names: Vec<String> = dir
            .entries()
            .expect("list dir")
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        assert_eq!(names, vec!["batch.json".to_owned()]);
        drop(std::fs::remove_dir_all(path));
    }

    #[test]
    fn rejects_nested_paths() {
        let (path, dir) = scratch_dir("nested");
        let result = write_atomic(&dir, Utf8Path::new("a/b.json"), "[]");

        assert!(matches!(result, Err(RegistryError::WriteError { .. })));
        drop(std::fs::remove_dir_all(path));
    }
}
