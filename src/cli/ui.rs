use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Select };
use indicatif::{ ProgressBar, ProgressStyle };
use std::path::PathBuf;
use std::time::Duration;

use paperpilot::{ InputCollector, PaperPilotError, RecoverableError };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

pub fn is_interactive() -> bool {
    Term::stdout().is_term()
}

pub fn terminal_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    width.clamp(40, 100).saturating_sub(4)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print an error together with what the user can do about it
pub fn report_error(err: &PaperPilotError) {
    print_error(&err.to_string());
    if let Some(hint) = err.recovery_strategy() {
        eprintln!("       {}", hint.dimmed());
    }
    if !err.is_recoverable() {
        eprintln!("       {}", "Retrying will not help until this is fixed.".dimmed());
    }
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} [{elapsed}] {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn prompt_text(prompt: &str, initial: &str) -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// List the files currently selected
pub fn print_selected_files(files: &[PathBuf]) {
    if files.is_empty() {
        return;
    }
    println!("Selected Files ({}):", files.len());
    for (i, file) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, file.display());
    }
}

/// Fill a collector by asking the user for each input channel
pub fn collect_inputs(collector: &mut InputCollector) -> std::io::Result<()> {
    print_header("Upload & Input");
    println!("Enter PDF file paths (one per line, empty line to finish):");
    loop {
        let path = prompt_text(&format!("PDF {}", collector.files().len() + 1), "")?;
        if path.trim().is_empty() {
            break;
        }
        if let Err(e) = collector.add_file(path.trim()) {
            print_warning(&e.to_string());
        }
    }

    while !collector.files().is_empty() && Confirm::with_theme(&get_theme())
        .with_prompt("Remove a selected file?")
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
    {
        let names: Vec<String> = collector
            .files()
            .iter()
            .map(|f| f.display().to_string())
            .collect();
        let selection = Select::with_theme(&get_theme())
            .with_prompt("File to remove")
            .items(&names)
            .default(0)
            .interact()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if let Ok(removed) = collector.remove_file(selection) {
            print_info(&format!("Removed {}", removed.display()));
        }
    }

    // Values given on the command line are offered for editing, not dropped
    let dois = prompt_text(
        "DOIs, separated by commas (e.g. 10.1038/nature12373)",
        collector.dois()
    )?;
    collector.set_dois(dois);
    let urls = prompt_text(
        "URLs, separated by commas (e.g. https://arxiv.org/abs/1234.5678)",
        collector.urls()
    )?;
    collector.set_urls(urls);
    let topics = prompt_text(
        "Optional topics for classification, separated by commas",
        collector.topics()
    )?;
    collector.set_topics(topics);
    Ok(())
}
