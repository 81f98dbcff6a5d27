//! Filesystem side of the conversion
//!
//! Directories are created idempotently and files are always overwritten.
//! Nothing is rolled back when a write fails part way through.

use std::fs;
use std::path::{Path, PathBuf};

use bruconv_core::convert::Artifact;

use crate::prelude::*;

/// Create `path` and any missing parents. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, replacing any existing file
pub fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// What happened while writing a plan
#[derive(Debug, Default)]
pub struct WriteReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Files that could not be written. Writing continues past these.
    pub failures: Vec<Error>,
}

/// Materialize `artifacts` below `root`
///
/// A directory that cannot be created stops the run, since everything planned
/// below it would fail too. File write errors are collected in the report.
pub fn write_artifacts(root: &Path, artifacts: &[Artifact]) -> Result<WriteReport, Error> {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        match artifact {
            Artifact::Directory(path) => {
                let target = root.join(path);
                ensure_dir(&target)?;
                log::info!("Created directory for folder: {}", path.display());
                report.directories.push(target);
            }
            Artifact::File { path, contents } => {
                let target = root.join(path);
                match write_file(&target, contents) {
                    Ok(()) => {
                        log::info!("Wrote file: {}", target.display());
                        report.files.push(target);
                    }
                    Err(err) => {
                        crate::logging::report_error("write_file", &err);
                        report.failures.push(err);
                    }
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Auth");

        ensure_dir(&path).unwrap();
        ensure_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("c");

        ensure_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken");
        fs::write(&path, "x").unwrap();

        assert!(matches!(ensure_dir(&path), Err(Error::CreateDir { .. })));
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Login_req_1.bru");

        write_file(&path, "first version that is longer").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let artifacts = vec![
            Artifact::Directory(PathBuf::from("Auth")),
            Artifact::File {
                path: PathBuf::from("Auth/Login_req_1.bru"),
                contents: "meta {}".to_string(),
            },
        ];

        let report = write_artifacts(temp_dir.path(), &artifacts).unwrap();

        assert_eq!(report.directories.len(), 1);
        assert_eq!(report.files.len(), 1);
        assert!(report.failures.is_empty());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Auth/Login_req_1.bru")).unwrap(),
            "meta {}"
        );
    }

    #[test]
    fn test_write_artifacts_collects_file_failures() {
        let temp_dir = TempDir::new().unwrap();
        let artifacts = vec![
            // Parent directory was never planned, so this write fails
            Artifact::File {
                path: PathBuf::from("Missing/Login_req_1.bru"),
                contents: "meta {}".to_string(),
            },
            Artifact::File {
                path: PathBuf::from("Health_req_2.bru"),
                contents: "meta {}".to_string(),
            },
        ];

        let report = write_artifacts(temp_dir.path(), &artifacts).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], Error::WriteFile { .. }));
        assert_eq!(report.files.len(), 1);
        assert!(temp_dir.path().join("Health_req_2.bru").is_file());
    }
}
