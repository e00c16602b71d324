use log::{ info, warn };
use std::path::{ Path, PathBuf };
use std::sync::atomic::{ AtomicBool, Ordering };

use crate::errors::{ PaperPilotError, PaperPilotResult };
use crate::implementations::input_collector::InputCollector;
use crate::models::analysis::StoredAnalysis;
use crate::models::common::is_safe_file_name;
use crate::traits::analysis_service::AnalysisService;
use crate::traits::result_store::ResultStore;

/// Collect, submit, store: the whole client workflow
pub struct PaperPilot<S: AnalysisService, R: ResultStore> {
    service: S,
    store: R,
    in_flight: AtomicBool,
}

/// What the results view should do with the stored slot
#[derive(Debug)]
pub enum ResultsView {
    Ready(StoredAnalysis),
    /// Nothing usable is stored; send the user to upload
    Redirect(PaperPilotError),
}

/// Clears the in-flight flag however the request ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: AnalysisService, R: ResultStore> PaperPilot<S, R> {
    pub fn new(service: S, store: R) -> Self {
        Self {
            service,
            store,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the collected input, run the analysis and keep the result.
    ///
    /// Only one request runs at a time. When the request fails the previously
    /// stored result is left untouched.
    pub async fn submit(&self, collector: &InputCollector) -> PaperPilotResult<StoredAnalysis> {
        let submission = collector.build()?;

        if self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PaperPilotError::RequestInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        info!("Submitting {} input(s) for analysis", submission.input_count());
        let result = self.service.analyze(&submission).await?;

        self.store.save(&result)
    }

    pub fn latest(&self) -> PaperPilotResult<StoredAnalysis> {
        self.store.load()
    }

    /// An empty or unreadable slot redirects; other failures (I/O) are errors
    pub fn latest_or_redirect(&self) -> PaperPilotResult<ResultsView> {
        match self.store.load() {
            Ok(stored) => Ok(ResultsView::Ready(stored)),
            Err(err @ (PaperPilotError::NoStoredResult | PaperPilotError::StoredResultInvalid { .. })) => {
                warn!("Redirecting to upload: {}", err);
                Ok(ResultsView::Redirect(err))
            }
            Err(err) => Err(err),
        }
    }

    pub fn clear(&self) -> PaperPilotResult<()> {
        self.store.clear()
    }

    /// Save one generated audio file into `dir`
    pub async fn download_audio(&self, filename: &str, dir: &Path) -> PaperPilotResult<PathBuf> {
        if !is_safe_file_name(filename) {
            return Err(PaperPilotError::InvalidAudioName(filename.to_string()));
        }

        let bytes = self.service.fetch_audio(filename).await?;
        tokio::fs::create_dir_all(dir).await?;
        let target = dir.join(filename);
        tokio::fs::write(&target, &bytes).await?;

        info!("Downloaded {} ({} bytes) to {}", filename, bytes.len(), target.display());
        Ok(target)
    }

    /// Save every audio file of the stored result; missing or unusable ones are skipped
    pub async fn download_all(&self, dir: &Path) -> PaperPilotResult<Vec<PathBuf>> {
        let stored = self.latest()?;
        let mut saved = Vec::new();

        for filename in stored.result.audio_files() {
            match self.download_audio(filename, dir).await {
                Ok(path) => saved.push(path),
                Err(PaperPilotError::AudioNotFound(name)) => {
                    warn!("Audio {} is no longer available", name);
                }
                Err(PaperPilotError::InvalidAudioName(name)) => {
                    warn!("Skipping audio with unusable name {:?}", name);
                }
                Err(e) => {
                    return Err(e);
                }
            }
        }

        Ok(saved)
    }
}
