use crate::errors::PaperPilotResult;
use crate::models::analysis::{ AnalysisResult, StoredAnalysis };

/// A single slot holding the most recent analysis result.
///
/// `save` replaces whatever was there. `load` fails with
/// [`PaperPilotError::NoStoredResult`](crate::errors::PaperPilotError::NoStoredResult)
/// when the slot is empty and with `StoredResultInvalid` when it cannot be decoded.
pub trait ResultStore: Send + Sync {
    fn save(&self, result: &AnalysisResult) -> PaperPilotResult<StoredAnalysis>;

    fn load(&self) -> PaperPilotResult<StoredAnalysis>;

    fn clear(&self) -> PaperPilotResult<()>;
}
