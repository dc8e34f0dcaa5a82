//! Load, filter, back up and rewrite a question bank in one call.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::backup::create_backup_at;
use crate::bank::QuestionBank;
use crate::error::{QuizbankError, Result};
use crate::filter::{DroppedQuestion, FilterConfig};

/// Removes questions from a bank file in place.
///
/// # Example
///
/// ```no_run
/// use quizbank::{FilterConfig, Pruner, PruneReport};
///
/// let pruner = Pruner::new(FilterConfig::new().with_drop_id_prefixes(["KEI-"]));
/// match pruner.prune("Resources/questions/questions_ja3.json").unwrap() {
///     PruneReport::Unchanged { .. } => println!("nothing to do"),
///     PruneReport::Rewritten { dropped, original_len, .. } => {
///         println!("removed {} of {}", dropped.len(), original_len)
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pruner {
    filter: FilterConfig,
    backup: bool,
    backup_time: Option<DateTime<Local>>,
}

impl Pruner {
    /// Create a pruner that backs up before writing.
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            filter,
            backup: true,
            backup_time: None,
        }
    }

    /// Enable or disable the timestamped backup.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Stamp the backup with a fixed time instead of the current one.
    pub fn with_backup_time(mut self, at: DateTime<Local>) -> Self {
        self.backup_time = Some(at);
        self
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Filter the bank at `path`, rewriting it only if something was removed.
    ///
    /// The filter is validated before the file is touched. When a backup is
    /// requested it is written and verified before the original is
    /// overwritten; any failure up to that point leaves the file unmodified.
    pub fn prune(&self, path: impl AsRef<Path>) -> Result<PruneReport> {
        let path = path.as_ref();

        self.filter.validate()?;

        if !path.exists() {
            return Err(QuizbankError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bank = QuestionBank::load(path)?;
        let outcome = self.filter.apply(bank);

        if outcome.is_unchanged() {
            return Ok(PruneReport::Unchanged {
                total: outcome.original_len,
            });
        }

        let backup = if self.backup {
            let at = self.backup_time.unwrap_or_else(Local::now);
            Some(create_backup_at(path, &at)?)
        } else {
            None
        };

        outcome.kept.save(path)?;

        Ok(PruneReport::Rewritten {
            backup,
            original_len: outcome.original_len,
            remaining: outcome.kept.len(),
            dropped: outcome.dropped,
        })
    }
}

/// What a prune run did.
#[derive(Debug, Clone)]
pub enum PruneReport {
    /// Nothing matched; the file was not touched.
    Unchanged { total: usize },
    /// The file was rewritten without the dropped questions.
    Rewritten {
        /// Backup location, when backups are enabled.
        backup: Option<PathBuf>,
        original_len: usize,
        remaining: usize,
        dropped: Vec<DroppedQuestion>,
    },
}

impl PruneReport {
    pub fn removed(&self) -> usize {
        match self {
            PruneReport::Unchanged { .. } => 0,
            PruneReport::Rewritten { dropped, .. } => dropped.len(),
        }
    }

    pub fn backup(&self) -> Option<&Path> {
        match self {
            PruneReport::Rewritten {
                backup: Some(path), ..
            } => Some(path.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_filter_fails_before_file_access() {
        let dir = TempDir::new().unwrap();
        // The path does not exist: a usage error must win over NotFound.
        let err = Pruner::new(FilterConfig::new())
            .prune(dir.path().join("missing.json"))
            .unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Pruner::new(FilterConfig::new().with_drop_categories(["敬語"]))
            .prune(dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, QuizbankError::NotFound { .. }));
    }

    #[test]
    fn test_rewrite_without_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[{"id":"KEI-001","category":"敬語"},{"id":"VOC-001","category":"語彙"}]"#,
        )
        .unwrap();

        let report = Pruner::new(FilterConfig::new().with_drop_id_prefixes(["KEI-"]))
            .with_backup(false)
            .prune(&path)
            .unwrap();

        assert_eq!(report.removed(), 1);
        assert!(report.backup().is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"id\": \"VOC-001\",\n    \"category\": \"語彙\"\n  }\n]\n"
        );
    }
}
