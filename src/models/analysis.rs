use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

use crate::models::common::SourceKind;

/// Response of the analysis service, as returned by `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: String,
    pub papers: Vec<Paper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<Synthesis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    pub statistics: Statistics,
    #[serde(default)]
    pub audio: AudioInfo,
}

impl AnalysisResult {
    /// Citations, treating an absent list as empty
    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or(&[])
    }

    /// Every downloadable audio file: per-paper summaries first, then the podcast
    pub fn audio_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.papers
            .iter()
            .filter_map(|p| p.audio_file.as_deref())
            .collect();
        if let Some(podcast) = self.audio.podcast_file.as_deref() {
            files.push(podcast);
        }
        files
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub topic: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub source: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub audio_file: Option<String>,
}

impl Paper {
    pub fn source_kind(&self) -> SourceKind {
        SourceKind::classify(&self.source)
    }
}

/// Cross-paper summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    pub text: String,
    pub num_papers: usize,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    pub topic: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_papers: usize,
    pub successful_summaries: usize,
    pub successful_audio_files: usize,
    pub podcast_created: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    #[serde(default)]
    pub podcast_file: Option<String>,
    /// Length of the podcast in seconds, when the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podcast_duration: Option<f64>,
}

/// The single locally stored result and when it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub stored_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

impl StoredAnalysis {
    pub fn now(result: AnalysisResult) -> Self {
        Self {
            stored_at: Utc::now(),
            result,
        }
    }
}
