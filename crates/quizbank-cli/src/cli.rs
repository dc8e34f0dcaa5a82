//! CLI argument definitions using clap.

use clap::Parser;
use quizbank::{FilterConfig, DEFAULT_BANK_PATH};
use std::path::PathBuf;

/// Filter the 日本語検定3級 question bank in place.
///
/// A timestamped backup is written next to the bank before it is rewritten,
/// unless --no-backup is set. Nothing is written if no question matches.
#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    quizbank --keep-categories 敬語 文法 語彙 意味 表記\n  \
    quizbank --drop-id-prefixes KEI-")]
pub struct Cli {
    /// Path to the JSON question bank
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BANK_PATH)]
    pub path: PathBuf,

    /// Retain only questions whose category is in this list
    #[arg(long, num_args = 0.., value_name = "CATEGORY")]
    pub keep_categories: Vec<String>,

    /// Remove any question whose category matches one of these values
    #[arg(long, num_args = 0.., value_name = "CATEGORY")]
    pub drop_categories: Vec<String>,

    /// Remove any question whose id starts with one of these prefixes
    #[arg(long, num_args = 0.., value_name = "PREFIX")]
    pub drop_id_prefixes: Vec<String>,

    /// Do not create a timestamped backup before writing
    #[arg(long)]
    pub no_backup: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List every removed question
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Filter rules given on the command line.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::new()
            .with_keep_categories(self.keep_categories.iter().cloned())
            .with_drop_categories(self.drop_categories.iter().cloned())
            .with_drop_id_prefixes(self.drop_id_prefixes.iter().cloned())
    }
}
