//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::strength::{Strength, StrengthReport};
use crate::vault::SecretRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credential entries.
///
/// Secrets are masked unless `show_secrets` is set; list output should
/// not splash plaintext on screen by default.
pub fn print_records_table(records: &[SecretRecord], show_secrets: bool) {
    if records.is_empty() {
        info("No entries found.");
        tip("Run `passvault add --title <TITLE> --username <USER>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Username", "Secret", "URL", "Tags", "Updated"]);

    for r in records {
        let secret = if show_secrets {
            r.secret.clone()
        } else {
            "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}".to_string()
        };
        table.add_row(vec![
            r.id.clone(),
            r.title.clone(),
            r.username.clone(),
            secret,
            r.url.clone(),
            r.tags.join(", "),
            r.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print a strength report with a colored category label.
pub fn print_strength_report(report: &StrengthReport) {
    let label = report.category.to_string();
    let styled = match report.category {
        Strength::VeryWeak | Strength::Weak => style(label).red().bold(),
        Strength::Fair => style(label).yellow().bold(),
        Strength::Good | Strength::Strong => style(label).green().bold(),
    };

    println!("Strength: {} (score {})", styled, report.score);
    for hint in &report.feedback {
        tip(hint);
    }
}
