//! Private copies of a places database.
//!
//! Firefox keeps `places.sqlite` locked while it runs. Reading a copy avoids
//! the lock; the copy and any SQLite sidecar files are removed when the
//! [`Snapshot`] is dropped.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use thiserror::Error;
use tracing::{debug, info, warn};

const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to create temporary database: {0}")]
    Create(#[source] io::Error),
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct Snapshot {
    path: TempPath,
}

impl Snapshot {
    /// Copies `source` (and its `-wal` file when present) to a freshly named
    /// file in `dir`, or the system temp directory when `dir` is `None`.
    pub fn create(source: &Path, prefix: &str, dir: Option<&Path>) -> Result<Self, SnapshotError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(".sqlite");
        let mut tmp = match dir {
            Some(d) => builder.tempfile_in(d),
            None => builder.tempfile(),
        }
        .map_err(SnapshotError::Create)?;

        let bytes = File::open(source)
            .and_then(|mut src| io::copy(&mut src, tmp.as_file_mut()))
            .map_err(|err| SnapshotError::Copy {
                from: source.to_path_buf(),
                to: tmp.path().to_path_buf(),
                source: err,
            })?;

        let snapshot = Self {
            path: tmp.into_temp_path(),
        };
        info!(
            "copied {} ({bytes} bytes) to {}",
            source.display(),
            snapshot.path().display()
        );

        let wal = sidecar(source, "-wal");
        if wal.exists() {
            let to = sidecar(snapshot.path(), "-wal");
            std::fs::copy(&wal, &to).map_err(|err| SnapshotError::Copy {
                from: wal.clone(),
                to: to.clone(),
                source: err,
            })?;
            debug!("copied {} to {}", wal.display(), to.display());
        }

        Ok(snapshot)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // The main file is removed by `TempPath` after this runs.
        for suffix in SIDECAR_SUFFIXES {
            let path = sidecar(&self.path, suffix);
            match std::fs::remove_file(&path) {
                Ok(()) => debug!("removed {}", path.display()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => warn!("failed to remove {}: {err}", path.display()),
            }
        }
        debug!("removing snapshot {}", self.path.display());
    }
}

/// `places.sqlite` + `-wal` → `places.sqlite-wal`.
pub fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
