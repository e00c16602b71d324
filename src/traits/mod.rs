pub mod analysis_service;
pub mod result_store;

pub use analysis_service::AnalysisService;
pub use result_store::ResultStore;
