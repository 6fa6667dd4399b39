//! JSON output for sorted record sets.
//!
//! Output is written to a temporary file next to the destination and
//! renamed over it once complete, so a failed run never leaves a
//! truncated file behind.
//!
//! A destination that is a symbolic link is resolved first and the file it
//! points at is replaced; the link itself stays in place. An existing file
//! keeps its permission bits. A new file gets mode `0o644` on Unix, without
//! applying the process umask.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rates_core::Record;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

/// Mode for created directories on Unix.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Mode for a newly created output file on Unix.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Symbolic links followed before giving up, as `ELOOP` does.
const MAX_LINK_HOPS: usize = 40;

/// Record of a written output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    /// Destination path
    pub path: PathBuf,
    /// Size in bytes
    pub bytes_written: usize,
}

/// Render records as a two-space indented JSON array.
pub fn render_json(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(PipelineError::Serialize)
}

/// Write records as JSON to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_json(records: &[Record], path: &Path) -> Result<EmitSummary> {
    let json = render_json(records)?;

    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_links(path).map_err(write_err)?;
    if target.as_path() != path {
        debug!(link = %path.display(), target = %target.display(), "Writing through symbolic link");
    }

    let dir = parent_dir(&target);
    create_dir(dir).map_err(|source| PipelineError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut staging = NamedTempFile::new_in(dir).map_err(write_err)?;
    debug!(staging = %staging.path().display(), "Writing to staging file");

    staging.write_all(json.as_bytes()).map_err(write_err)?;
    staging.as_file().sync_all().map_err(write_err)?;
    copy_permissions(staging.as_file(), &target).map_err(write_err)?;
    staging.persist(&target).map_err(|e| write_err(e.error))?;

    info!(
        path = %path.display(),
        records = records.len(),
        size = json.len(),
        "Output written to file"
    );

    Ok(EmitSummary {
        path: path.to_path_buf(),
        bytes_written: json.len(),
    })
}

/// Directory that will hold `path`; a bare file name resolves to `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Follow `path` through any chain of symbolic links to the file they name.
///
/// A dangling link resolves to its missing target, which is then created.
fn resolve_links(path: &Path) -> io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)?;
                target = parent_dir(&target).join(link);
            }
            _ => return Ok(target),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links at {}", path.display()),
    ))
}

fn create_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

/// Give the staging file the permissions of the file it replaces, or
/// `FILE_MODE` when there is none.
#[cfg(unix)]
fn copy_permissions(file: &fs::File, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = match fs::metadata(target) {
        Ok(meta) if meta.is_file() => meta.permissions(),
        _ => fs::Permissions::from_mode(FILE_MODE),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_permissions(file: &fs::File, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) if meta.is_file() => file.set_permissions(meta.permissions()),
        _ => Ok(()),
    }
}
