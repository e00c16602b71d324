use anyhow::Result;

use paperpilot::{ PaperPilotError, ResultsView, StoredAnalysis };

use crate::cli::commands::upload::{ self, UploadArgs };
use crate::cli::{ ui, OutputFormat, Session };

/// Show the stored results, or send the user to upload when there are none
pub async fn execute(session: &Session, full: bool) -> Result<()> {
    match session.pilot.latest_or_redirect()? {
        ResultsView::Ready(stored) => display(session, &stored, full),
        ResultsView::Redirect(err) => redirect_to_upload(session, &err, full).await,
    }
}

async fn redirect_to_upload(session: &Session, err: &PaperPilotError, full: bool) -> Result<()> {
    ui::print_warning(&err.to_string());

    if ui::is_interactive() && ui::confirm_action("Start a new analysis now?")? {
        let args = UploadArgs {
            interactive: true,
            full,
            ..UploadArgs::default()
        };
        return upload::execute(session, args).await;
    }

    ui::print_info("Run `paperpilot upload` with PDF files, DOIs or URLs to create results.");
    Ok(())
}

/// Print a stored result in the session's output format
pub fn display(session: &Session, stored: &StoredAnalysis, full: bool) -> Result<()> {
    match session.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stored.result)?);
        }
        OutputFormat::Text => {
            let renderer = session.renderer(full);
            print!("{}", renderer.render(&stored.result, Some(stored.stored_at)));
            if !stored.result.audio_files().is_empty() {
                ui::print_info("Save the audio with `paperpilot download --all`.");
            }
        }
    }
    Ok(())
}
