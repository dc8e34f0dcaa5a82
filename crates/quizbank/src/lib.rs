//! quizbank: maintenance helpers for a JSON quiz question bank.
//!
//! A question bank is a JSON array of question objects. This crate filters
//! questions out of a bank by category or id prefix and rewrites the file in
//! place, after taking a timestamped backup.
//!
//! # Core Principles
//!
//! - **Opaque records**: only `category` and `id` are read; every other
//!   field is written back untouched and in its original order
//! - **Stable**: surviving questions keep their relative order
//! - **Backup first**: the original is copied and verified before any write,
//!   and a run that removes nothing writes nothing
//!
//! # Example
//!
//! ```no_run
//! use quizbank::{FilterConfig, Pruner};
//!
//! let filter = FilterConfig::new().with_keep_categories(["敬語", "文法", "語彙", "意味", "表記"]);
//! let report = Pruner::new(filter).prune("Resources/questions/questions_ja3.json").unwrap();
//!
//! println!("Removed: {}", report.removed());
//! ```

pub mod backup;
pub mod bank;
pub mod error;
pub mod filter;
pub mod question;

mod pruner;

pub use crate::pruner::{PruneReport, Pruner};
pub use backup::{backup_path, create_backup, BACKUP_TIMESTAMP_FORMAT};
pub use bank::{QuestionBank, DEFAULT_BANK_PATH};
pub use error::{QuizbankError, Result};
pub use filter::{DropReason, DroppedQuestion, FilterConfig, FilterOutcome};
pub use question::Question;
