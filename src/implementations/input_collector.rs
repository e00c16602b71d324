use log::{ debug, warn };
use std::path::{ Path, PathBuf };

use crate::errors::{ PaperPilotError, PaperPilotResult };
use crate::models::common::{ looks_like_doi, parse_list };
use crate::models::submission::Submission;

/// Gathers the files and text fields of one submission.
///
/// Text fields are kept as typed and only split on commas by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    files: Vec<PathBuf>,
    dois: String,
    urls: String,
    topics: String,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a PDF; anything else is refused and the selection stays as it was
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> PaperPilotResult<()> {
        let path = path.as_ref();
        if !is_pdf(path) {
            return Err(PaperPilotError::UnsupportedFile(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(PaperPilotError::FileNotFound(path.to_path_buf()));
        }
        debug!("Selected {}", path.display());
        self.files.push(path.to_path_buf());
        Ok(())
    }

    /// Select every acceptable file and hand back the ones that were refused
    pub fn add_files<I, P>(&mut self, paths: I) -> Vec<(PathBuf, PaperPilotError)>
        where I: IntoIterator<Item = P>, P: AsRef<Path>
    {
        paths
            .into_iter()
            .filter_map(|path| {
                let path = path.as_ref();
                self.add_file(path)
                    .err()
                    .map(|e| (path.to_path_buf(), e))
            })
            .collect()
    }

    pub fn remove_file(&mut self, index: usize) -> PaperPilotResult<PathBuf> {
        if index >= self.files.len() {
            return Err(PaperPilotError::InvalidSelection {
                index,
                count: self.files.len(),
            });
        }
        Ok(self.files.remove(index))
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn set_dois(&mut self, text: impl Into<String>) {
        self.dois = text.into();
    }

    pub fn set_urls(&mut self, text: impl Into<String>) {
        self.urls = text.into();
    }

    pub fn set_topics(&mut self, text: impl Into<String>) {
        self.topics = text.into();
    }

    pub fn dois(&self) -> &str {
        &self.dois
    }

    pub fn urls(&self) -> &str {
        &self.urls
    }

    pub fn topics(&self) -> &str {
        &self.topics
    }

    /// True when there are files, or the DOI or URL text has at least one entry
    pub fn has_input(&self) -> bool {
        !self.files.is_empty() ||
            !parse_list(&self.dois).is_empty() ||
            !parse_list(&self.urls).is_empty()
    }

    pub fn build(&self) -> PaperPilotResult<Submission> {
        if !self.has_input() {
            return Err(PaperPilotError::MissingInput);
        }

        let submission = Submission {
            files: self.files.clone(),
            dois: parse_list(&self.dois),
            urls: parse_list(&self.urls),
            topics: parse_list(&self.topics),
        };

        // The service has the final say; odd-looking entries are only flagged
        for doi in submission.dois.iter().filter(|d| !looks_like_doi(d)) {
            warn!("'{}' does not look like a DOI", doi);
        }
        for url in submission.urls.iter().filter(|u| reqwest::Url::parse(u).is_err()) {
            warn!("'{}' does not look like a URL", url);
        }

        Ok(submission)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
