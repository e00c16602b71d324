use anyhow::Result;
use std::path::PathBuf;

use paperpilot::{ InputCollector, PaperPilotError };

use crate::cli::commands::results;
use crate::cli::{ ui, Session };

#[derive(Debug, Default)]
pub struct UploadArgs {
    pub files: Vec<PathBuf>,
    pub dois: Option<String>,
    pub urls: Option<String>,
    pub topics: Option<String>,
    pub interactive: bool,
    pub full: bool,
}

/// Collect inputs, run the analysis and show what came back
pub async fn execute(session: &Session, args: UploadArgs) -> Result<()> {
    let mut collector = InputCollector::new();

    let rejected = collector.add_files(&args.files);
    for (path, err) in &rejected {
        ui::print_warning(&format!("Skipping {}: {}", path.display(), err));
    }
    if rejected.iter().any(|(_, e)| matches!(e, PaperPilotError::UnsupportedFile(_))) {
        ui::print_warning("Only PDF files are supported");
    }

    collector.set_dois(args.dois.unwrap_or_default());
    collector.set_urls(args.urls.unwrap_or_default());
    collector.set_topics(args.topics.unwrap_or_default());

    if args.interactive || (!collector.has_input() && ui::is_interactive()) {
        ui::collect_inputs(&mut collector)?;
    }

    // Validate before starting the spinner
    let submission = collector.build()?;

    ui::print_header("Submitting Papers");
    ui::print_selected_files(&submission.files);
    if !submission.dois.is_empty() {
        ui::print_result("DOIs", &submission.dois.join(", "));
    }
    if !submission.urls.is_empty() {
        ui::print_result("URLs", &submission.urls.join(", "));
    }
    if !submission.topics.is_empty() {
        ui::print_result("Topics", &submission.topics.join(", "));
    }

    let spinner = ui::spinner_with_message("Processing... extracting, summarizing and generating audio");
    let outcome = session.pilot.submit(&collector).await;

    match outcome {
        Ok(stored) => {
            spinner.finish_and_clear();
            ui::print_success("Analysis completed successfully!");
            results::display(session, &stored, args.full)
        }
        Err(err) => {
            spinner.abandon_with_message("Analysis failed");
            Err(err.into())
        }
    }
}
