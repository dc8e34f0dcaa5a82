//! Prune command - filter the question bank and rewrite it in place.

use colored::Colorize;
use quizbank::{DroppedQuestion, FilterConfig, PruneReport, Pruner};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = cli.filter_config();

    if cli.verbose && !cli.json {
        println!(
            "{} {}",
            "Filtering".cyan().bold(),
            cli.path.display().to_string().white()
        );
        print_filter(&filter);
        println!();
    }

    let report = Pruner::new(filter)
        .with_backup(!cli.no_backup)
        .prune(&cli.path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&cli, &report))?);
        return Ok(());
    }

    match report {
        PruneReport::Unchanged { total } => {
            println!(
                "{} No questions matched the provided filters; nothing to do.",
                "Note:".yellow().bold()
            );
            if cli.verbose {
                println!("{} questions left untouched", total);
            }
        }
        PruneReport::Rewritten {
            backup,
            original_len,
            remaining,
            dropped,
        } => {
            if let Some(backup) = backup {
                println!(
                    "{} {}",
                    "Backup created:".green().bold(),
                    backup.display().to_string().white()
                );
            }

            if cli.verbose {
                print_dropped(&dropped);
            }

            println!(
                "{} {} of {} questions ({} remaining)",
                "Removed".cyan().bold(),
                dropped.len().to_string().white().bold(),
                original_len,
                remaining
            );
        }
    }

    Ok(())
}

fn print_filter(filter: &FilterConfig) {
    let rules = [
        ("keep categories", &filter.keep_categories),
        ("drop categories", &filter.drop_categories),
        ("drop id prefixes", &filter.drop_id_prefixes),
    ];

    for (label, values) in rules {
        if !values.is_empty() {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            println!("  {:18} {}", label, joined.join(", "));
        }
    }
}

fn print_dropped(dropped: &[DroppedQuestion]) {
    println!("{}", "Removed questions:".yellow().bold());
    for d in dropped {
        println!("  #{:<5} {} {}", d.index, id_cell(&d.id), d.reason);
    }
    println!();
}

/// Pad before styling so ANSI codes do not count toward the width.
fn id_cell(id: &str) -> String {
    if id.is_empty() {
        format!("{:12}", "(no id)").dimmed().to_string()
    } else {
        format!("{:12}", id)
    }
}

fn report_json(cli: &Cli, report: &PruneReport) -> serde_json::Value {
    match report {
        PruneReport::Unchanged { total } => serde_json::json!({
            "file": cli.path,
            "changed": false,
            "backup": null,
            "total": total,
            "removed": 0,
            "remaining": total,
            "dropped": [],
        }),
        PruneReport::Rewritten {
            backup,
            original_len,
            remaining,
            dropped,
        } => serde_json::json!({
            "file": cli.path,
            "changed": true,
            "backup": backup,
            "total": original_len,
            "removed": dropped.len(),
            "remaining": remaining,
            "dropped": dropped,
        }),
    }
}
