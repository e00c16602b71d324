pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ApiConfig, ConfigError, PaperPilotConfig, StorageConfig };
pub use errors::{ PaperPilotError, PaperPilotResult, RecoverableError };
pub use implementations::{
    file_store::FileResultStore,
    http_client::HttpAnalysisService,
    input_collector::InputCollector,
    pipeline::{ PaperPilot, ResultsView },
    renderer::{ render_home, RenderOptions, ResultRenderer },
};
pub use models::{
    analysis::{ AnalysisResult, AudioInfo, Citation, Paper, Statistics, StoredAnalysis, Synthesis },
    common::SourceKind,
    submission::Submission,
};
pub use traits::{ AnalysisService, ResultStore };
