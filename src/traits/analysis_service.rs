use async_trait::async_trait;

use crate::errors::PaperPilotResult;
use crate::models::analysis::AnalysisResult;
use crate::models::submission::Submission;

/// Trait for the remote service that analyzes papers and serves generated audio
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit papers for analysis and wait for the single JSON response
    async fn analyze(&self, submission: &Submission) -> PaperPilotResult<AnalysisResult>;

    /// Fetch a generated audio file by the name the analysis result gave it
    async fn fetch_audio(&self, filename: &str) -> PaperPilotResult<Vec<u8>>;

    /// Link the user can open to download an audio file
    fn audio_url(&self, filename: &str) -> String;
}
