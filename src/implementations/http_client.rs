use async_trait::async_trait;
use log::{ debug, error, info, warn };
use reqwest::multipart::{ Form, Part };
use reqwest::StatusCode;
use std::path::Path;

use crate::config::ApiConfig;
use crate::errors::{ PaperPilotError, PaperPilotResult };
use crate::models::analysis::AnalysisResult;
use crate::models::common::is_safe_file_name;
use crate::models::submission::Submission;
use crate::traits::analysis_service::AnalysisService;

/// Talks to the analysis service over HTTP.
///
/// `POST {api_url}/analyze` takes a multipart form with one `files` part per
/// PDF and comma-separated `dois`, `urls` and `topic_list` fields, and answers
/// with an [`AnalysisResult`] document. Generated audio is served from
/// `GET {api_url}/audio/{filename}`.
#[derive(Clone)]
pub struct HttpAnalysisService {
    config: ApiConfig,
    http_client: reqwest::Client,
}

impl HttpAnalysisService {
    pub fn new(config: ApiConfig) -> PaperPilotResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PaperPilotError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    async fn build_form(&self, submission: &Submission) -> PaperPilotResult<Form> {
        let mut form = Form::new();

        for path in &submission.files {
            form = form.part("files", pdf_part(path).await?);
        }
        if !submission.dois.is_empty() {
            form = form.text("dois", submission.dois.join(","));
        }
        if !submission.urls.is_empty() {
            form = form.text("urls", submission.urls.join(","));
        }
        if !submission.topics.is_empty() {
            form = form.text("topic_list", submission.topics.join(","));
        }

        Ok(form)
    }

    fn transport_error(&self, err: reqwest::Error) -> PaperPilotError {
        if err.is_timeout() {
            warn!("Request timed out after {}s", self.config.timeout_secs);
            PaperPilotError::Timeout(self.config.timeout_secs)
        } else {
            error!("Transport error talking to {}: {}", self.base_url(), err);
            PaperPilotError::Network(err.to_string())
        }
    }
}

async fn pdf_part(path: &Path) -> PaperPilotResult<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PaperPilotError::FileNotFound(path.to_path_buf())
        } else {
            PaperPilotError::Io(e)
        }
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "paper.pdf".to_string());

    debug!("Attaching {} ({} bytes)", file_name, bytes.len());

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/pdf")
        .map_err(|e| PaperPilotError::Network(format!("MIME error: {}", e)))
}

/// Turn an error body into the message shown to the user.
///
/// Plain text is used as is, JSON objects contribute their `detail` field,
/// and any other JSON is shown serialized.
pub fn backend_error_message(body: &str, status: StatusCode) -> String {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(serde_json::Value::Object(map)) if map.contains_key("detail") => {
            match &map["detail"] {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            }
        }
        Ok(other) => other.to_string(),
        Err(_) => body.trim().to_string(),
    };

    if message.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        message
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, submission: &Submission) -> PaperPilotResult<AnalysisResult> {
        if submission.is_empty() {
            return Err(PaperPilotError::MissingInput);
        }

        let url = format!("{}/analyze", self.base_url());
        info!(
            "Submitting {} file(s), {} DOI(s), {} URL(s) to {}",
            submission.files.len(),
            submission.dois.len(),
            submission.urls.len(),
            url
        );

        let form = self.build_form(submission).await?;
        let response = self.http_client
            .post(&url)
            .multipart(form)
            .send().await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = backend_error_message(&body, status);
            error!("Backend returned {}: {}", status, message);
            return Err(PaperPilotError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json
            ::from_str(&body)
            .map_err(|e| PaperPilotError::MalformedResponse(e.to_string()))?;

        info!("Analysis {} returned {} paper(s)", result.session_id, result.papers.len());
        Ok(result)
    }

    async fn fetch_audio(&self, filename: &str) -> PaperPilotResult<Vec<u8>> {
        if !is_safe_file_name(filename) {
            return Err(PaperPilotError::InvalidAudioName(filename.to_string()));
        }

        let url = self.audio_url(filename);
        debug!("Fetching audio from {}", url);

        let response = self.http_client
            .get(&url)
            .send().await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PaperPilotError::AudioNotFound(filename.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaperPilotError::Backend {
                status: status.as_u16(),
                message: backend_error_message(&body, status),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(bytes.to_vec())
    }

    fn audio_url(&self, filename: &str) -> String {
        self.config.audio_url(filename)
    }
}
