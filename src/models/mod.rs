pub mod common;
pub mod analysis;
pub mod submission;

// Re-export common model types
pub use common::{is_safe_file_name, looks_like_doi, parse_list, SourceKind};
pub use analysis::{AnalysisResult, AudioInfo, Citation, Paper, Statistics, StoredAnalysis, Synthesis};
pub use submission::Submission;
