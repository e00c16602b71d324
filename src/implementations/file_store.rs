use log::{ debug, info };
use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use crate::errors::{ PaperPilotError, PaperPilotResult };
use crate::models::analysis::{ AnalysisResult, StoredAnalysis };
use crate::traits::result_store::ResultStore;

/// Keeps the last analysis result as a JSON file
#[derive(Debug, Clone)]
pub struct FileResultStore {
    path: PathBuf,
}

impl FileResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn invalid(&self, reason: impl ToString) -> PaperPilotError {
        PaperPilotError::StoredResultInvalid {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ResultStore for FileResultStore {
    fn save(&self, result: &AnalysisResult) -> PaperPilotResult<StoredAnalysis> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let stored = StoredAnalysis::now(result.clone());
        let json = serde_json
            ::to_string_pretty(&stored)
            .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?;

        // Write atomically via temp file
        let temp_file = self.path.with_extension("json.tmp");
        fs::write(&temp_file, &json)?;
        fs::rename(&temp_file, &self.path)?;

        info!("Saved analysis {} to {}", result.session_id, self.path.display());
        Ok(stored)
    }

    fn load(&self) -> PaperPilotResult<StoredAnalysis> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No results file at {}", self.path.display());
                return Err(PaperPilotError::NoStoredResult);
            }
            Err(e) => {
                return Err(self.invalid(e));
            }
        };

        if contents.trim().is_empty() {
            return Err(PaperPilotError::NoStoredResult);
        }

        serde_json::from_str(&contents).map_err(|e| self.invalid(e))
    }

    fn clear(&self) -> PaperPilotResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
