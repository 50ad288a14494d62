//! Terminal UI utilities

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use inheritx_core::plans::PlanStatus;
use std::time::Duration;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Create a spinner progress indicator
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for text input
pub fn input(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Input;
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a password without echo
pub fn password(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Password;
    Ok(Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Print JSON prettily
pub fn json(value: &serde_json::Value) {
    if let Ok(pretty) = serde_json::to_string_pretty(value) {
        println!("{}", pretty);
    }
}

/// Status badge colored like the web table
pub fn status_badge(status: PlanStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        PlanStatus::Pending => label.yellow(),
        PlanStatus::Active => label.green(),
        PlanStatus::Paused => label.blue(),
        PlanStatus::Executed => label.cyan(),
        PlanStatus::Cancelled => label.red(),
    }
}
