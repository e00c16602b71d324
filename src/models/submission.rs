use serde::{ Deserialize, Serialize };
use std::path::PathBuf;

/// Everything sent to the analysis service in one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub files: Vec<PathBuf>,
    pub dois: Vec<String>,
    pub urls: Vec<String>,
    pub topics: Vec<String>,
}

impl Submission {
    /// Topics only steer classification, so they don't count as input
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dois.is_empty() && self.urls.is_empty()
    }

    pub fn input_count(&self) -> usize {
        self.files.len() + self.dois.len() + self.urls.len()
    }
}
