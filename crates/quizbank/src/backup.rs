//! Timestamped backups of the question bank.
//!
//! A backup is a byte-for-byte sibling copy named
//! `<file name>.bak-<YYYYMMDD-HHMMSS>` using local time:
//!
//! ```text
//! Resources/questions/
//! ├── questions_ja3.json                       # Rewritten
//! └── questions_ja3.json.bak-20240105-093000   # Previous contents
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use sha2::{Digest, Sha256};

use crate::error::{QuizbankError, Result};

/// strftime format of the backup suffix.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Path of the backup for `source` taken at `timestamp`.
///
/// # Example
///
/// ```
/// use chrono::{Local, TimeZone};
/// use quizbank::backup_path;
///
/// let at = Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
/// let path = backup_path("data/questions.json", &at);
/// assert_eq!(path.to_string_lossy(), "data/questions.json.bak-20240105-093000");
/// ```
pub fn backup_path<Tz>(source: impl AsRef<Path>, timestamp: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let source = source.as_ref();
    let name = source.file_name().unwrap_or_default().to_string_lossy();
    let stamp = timestamp.format(BACKUP_TIMESTAMP_FORMAT);

    source.with_file_name(format!("{}.bak-{}", name, stamp))
}

/// Copy `source` to a backup stamped with the current local time.
///
/// The copy is read back and compared against the source before returning,
/// so a successful result means the backup is complete and readable.
pub fn create_backup(source: impl AsRef<Path>) -> Result<PathBuf> {
    create_backup_at(source, &Local::now())
}

/// Copy `source` to the backup path for `timestamp`.
///
/// Refuses to overwrite an existing file at that path.
pub fn create_backup_at<Tz>(source: impl AsRef<Path>, timestamp: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let source = source.as_ref();
    let target = backup_path(source, timestamp);

    let mut reader = File::open(source)
        .map_err(|e| backup_error(source, format!("failed to open source: {}", e)))?;

    // create_new makes the existence check and the creation one step.
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| {
            let message = if e.kind() == io::ErrorKind::AlreadyExists {
                format!("'{}' already exists", target.display())
            } else {
                format!("failed to create '{}': {}", target.display(), e)
            };
            backup_error(source, message)
        })?;

    let copy_err = |e: io::Error| {
        backup_error(
            source,
            format!("failed to copy to '{}': {}", target.display(), e),
        )
    };
    io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    writer.sync_all().map_err(copy_err)?;

    let permissions = reader.metadata().map_err(copy_err)?.permissions();
    fs::set_permissions(&target, permissions).map_err(copy_err)?;

    verify_backup(source, &target)?;

    Ok(target)
}

/// Check that `backup` holds exactly the bytes of `source`.
fn verify_backup(source: &Path, backup: &Path) -> Result<()> {
    let expected = file_digest(source).map_err(|e| {
        backup_error(source, format!("failed to re-read source: {}", e))
    })?;
    let actual = file_digest(backup).map_err(|e| {
        backup_error(
            source,
            format!("backup '{}' is not readable: {}", backup.display(), e),
        )
    })?;

    if expected != actual {
        return Err(backup_error(
            source,
            format!("backup '{}' does not match the source", backup.display()),
        ));
    }

    Ok(())
}

fn file_digest(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

fn backup_error(source: &Path, message: String) -> QuizbankError {
    QuizbankError::Backup {
        path: source.to_path_buf(),
        message,
    }
}
