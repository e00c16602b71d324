use serde::{ Deserialize, Serialize };
use std::fmt;

/// Where a paper came from, judged from its source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Pdf,
    Doi,
    Url,
    Other,
}

impl SourceKind {
    pub fn classify(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceKind::Url
        } else if lower.ends_with(".pdf") {
            SourceKind::Pdf
        } else if looks_like_doi(source) {
            SourceKind::Doi
        } else {
            SourceKind::Other
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::Pdf => "PDF",
            SourceKind::Doi => "DOI",
            SourceKind::Url => "URL",
            SourceKind::Other => "Source",
        };
        f.write_str(label)
    }
}

/// A DOI is "10.<registrant>/<suffix>" with a non-empty suffix
pub fn looks_like_doi(candidate: &str) -> bool {
    let Some(rest) = candidate.strip_prefix("10.") else {
        return false;
    };
    match rest.split_once('/') {
        Some((registrant, suffix)) =>
            !registrant.is_empty() &&
                registrant.chars().all(|c| c.is_ascii_digit() || c == '.') &&
                !suffix.trim().is_empty(),
        None => false,
    }
}

/// Split comma-separated input, trimming entries and dropping blanks
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// A bare file name the server handed us: no separators, not `.` or `..`.
/// Dots inside a name are fine; truncated URL names end up like `site_v2..mp3`.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.trim().is_empty() &&
        name != "." &&
        name != ".." &&
        !name.contains('/') &&
        !name.contains('\\')
}
