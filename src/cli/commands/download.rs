use anyhow::Result;
use std::path::PathBuf;

use paperpilot::PaperPilotError;

use crate::cli::{ ui, Session };

/// Save generated audio locally, or list what can be downloaded
pub async fn execute(
    session: &Session,
    filename: Option<&str>,
    all: bool,
    dir: Option<PathBuf>
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| session.config.download_dir());

    if all {
        let spinner = ui::spinner_with_message("Downloading audio...");
        let saved = session.pilot.download_all(&dir).await;
        spinner.finish_and_clear();
        let saved = saved?;
        if saved.is_empty() {
            ui::print_warning("No audio files were available to download.");
        }
        for path in saved {
            ui::print_success(&format!("Saved {}", path.display()));
        }
        return Ok(());
    }

    if let Some(filename) = filename {
        let spinner = ui::spinner_with_message(&format!("Downloading {}...", filename));
        let saved = session.pilot.download_audio(filename, &dir).await;
        spinner.finish_and_clear();
        ui::print_success(&format!("Audio download finished: {}", saved?.display()));
        return Ok(());
    }

    list_available(session)
}

fn list_available(session: &Session) -> Result<()> {
    let stored = match session.pilot.latest() {
        Ok(stored) => stored,
        Err(PaperPilotError::NoStoredResult) => {
            ui::print_info("No analysis results yet. Run `paperpilot upload` first.");
            return Ok(());
        }
        Err(err) => {
            return Err(err.into());
        }
    };

    let files = stored.result.audio_files();
    if files.is_empty() {
        ui::print_info("The last analysis produced no audio.");
        return Ok(());
    }

    ui::print_header("Available Audio");
    for file in files {
        ui::print_result(file, &session.config.api.audio_url(file));
    }
    Ok(())
}
