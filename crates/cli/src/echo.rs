use owo_colors::OwoColorize;
use seoscope_core::{PageReport, Severity};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Seoscope".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "On-page SEO analysis for web pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
#[allow(dead_code)]
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print the report summary with color-coded severities
pub fn print_report_summary(report: &PageReport) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Analysis Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Score:".dimmed(),
        report.seo_score.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Words:".dimmed(),
        report.word_count.to_string().bright_white()
    );

    if report.seo_issues.is_empty() {
        eprintln!("  {} {}\n", "Issues:".dimmed(), "none".bright_green());
        return;
    }

    eprintln!("  {}", "Issues:".dimmed());
    for issue in &report.seo_issues {
        match issue.severity {
            Severity::High => eprintln!("    {} {}", "high".bright_red(), issue.issue),
            Severity::Medium => eprintln!("    {} {}", "medium".bright_yellow(), issue.issue),
            Severity::Low => eprintln!("    {} {}", "low".bright_blue(), issue.issue),
        }
    }
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
