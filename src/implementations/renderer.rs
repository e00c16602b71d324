use chrono::{ DateTime, Local, Utc };
use colored::*;
use std::fmt::Write;
use textwrap::{ wrap, Options };

use crate::config::ApiConfig;
use crate::models::analysis::{ AnalysisResult, AudioInfo, Citation, Paper, Statistics, Synthesis };

/// Summaries longer than this are collapsed unless full output is asked for
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Show summaries in full instead of a preview
    pub full: bool,
    /// Wrap width for prose
    pub width: usize,
    /// Emit terminal colours
    pub styled: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            full: false,
            width: 80,
            styled: false,
        }
    }
}

/// Turns analysis results into terminal text
pub struct ResultRenderer {
    options: RenderOptions,
    api: ApiConfig,
}

impl ResultRenderer {
    pub fn new(options: RenderOptions, api: ApiConfig) -> Self {
        Self { options, api }
    }

    /// Every section, in display order
    pub fn render(&self, result: &AnalysisResult, stored_at: Option<DateTime<Utc>>) -> String {
        let mut out = String::new();
        out.push_str(&self.render_header(result, stored_at));
        out.push_str(&self.render_statistics(&result.statistics));
        out.push_str(&self.render_papers(&result.papers));
        if let Some(synthesis) = &result.synthesis {
            out.push_str(&self.render_synthesis(synthesis, &result.audio));
        }
        out.push_str(&self.render_citations(result.citations()));
        out
    }

    pub fn render_header(&self, result: &AnalysisResult, stored_at: Option<DateTime<Utc>>) -> String {
        let mut out = self.heading("Analysis Results");
        let _ = writeln!(
            out,
            "Session: {} • {} papers processed",
            result.session_id,
            result.papers.len()
        );
        if let Some(at) = stored_at {
            let local: DateTime<Local> = at.into();
            let _ = writeln!(out, "Saved: {}", local.format("%Y-%m-%d %H:%M"));
        }
        out.push('\n');
        out
    }

    pub fn render_statistics(&self, stats: &Statistics) -> String {
        let mut out = self.heading("Statistics");
        let rows = [
            ("Total Papers", stats.total_papers.to_string()),
            ("Summaries Generated", stats.successful_summaries.to_string()),
            ("Audio Files Created", stats.successful_audio_files.to_string()),
            ("Podcast Generated", (if stats.podcast_created { "Yes" } else { "No" }).to_string()),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "  {:<20} {}", format!("{}:", label), value);
        }
        out.push('\n');
        out
    }

    pub fn render_papers(&self, papers: &[Paper]) -> String {
        let mut out = self.heading("Individual Paper Summaries");
        if papers.is_empty() {
            out.push_str("  No papers were processed.\n\n");
            return out;
        }

        for (index, paper) in papers.iter().enumerate() {
            let title = format!("{}. {}", index + 1, paper.title);
            let _ = writeln!(out, "{}", self.bold(&title));
            let _ = writeln!(out, "  Topic:   {}", paper.topic);
            let _ = writeln!(out, "  Authors: {}", authors_line(&paper.authors));
            let _ = writeln!(out, "  {:<8} {}", format!("{}:", paper.source_kind()), paper.source);
            out.push('\n');
            out.push_str(&self.summary_block(&paper.summary));
            if let Some(audio) = &paper.audio_file {
                let _ = writeln!(out, "  Audio Summary: {}", self.api.audio_url(audio));
            }
            out.push('\n');
        }
        out
    }

    pub fn render_synthesis(&self, synthesis: &Synthesis, audio: &AudioInfo) -> String {
        let mut out = self.heading("Cross-Paper Synthesis");
        let _ = writeln!(out, "{} papers • {}", synthesis.num_papers, synthesis.kind);
        out.push('\n');
        out.push_str(&self.wrapped(&synthesis.text, "  "));

        if let Some(podcast) = &audio.podcast_file {
            out.push('\n');
            let _ = writeln!(out, "  Complete Podcast: {}", self.api.audio_url(podcast));
            if let Some(seconds) = audio.podcast_duration {
                let _ = writeln!(out, "  Duration: {} minutes", (seconds / 60.0).round() as u64);
            }
        }
        out.push('\n');
        out
    }

    /// Empty when there are no citations
    pub fn render_citations(&self, citations: &[Citation]) -> String {
        if citations.is_empty() {
            return String::new();
        }
        let mut out = self.heading("Citations");
        for citation in citations {
            let summary = if citation.summary.trim().is_empty() {
                "No summary available."
            } else {
                citation.summary.as_str()
            };
            let _ = writeln!(out, "  Source:  {}", citation.source);
            let _ = writeln!(out, "  Topic:   {}", citation.topic);
            let _ = writeln!(out, "  Summary: {}", summary);
            out.push('\n');
        }
        out
    }

    fn summary_block(&self, summary: &str) -> String {
        let char_count = summary.chars().count();
        if self.options.full || char_count <= SUMMARY_PREVIEW_CHARS {
            return self.wrapped(summary, "  ");
        }

        let preview: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        let mut out = self.wrapped(&format!("{}…", preview.trim_end()), "  ");
        let _ = writeln!(out, "  {}", self.dim("(show more with --full)"));
        out
    }

    fn wrapped(&self, text: &str, indent: &str) -> String {
        let options = Options::new(self.options.width.max(20))
            .initial_indent(indent)
            .subsequent_indent(indent);
        let mut out = String::new();
        for paragraph in text.lines() {
            if paragraph.trim().is_empty() {
                out.push('\n');
                continue;
            }
            for line in wrap(paragraph, &options) {
                let _ = writeln!(out, "{}", line);
            }
        }
        out
    }

    fn heading(&self, title: &str) -> String {
        if self.options.styled {
            format!("{}\n\n", format!(" {} ", title).bold().white().on_blue())
        } else {
            format!("== {} ==\n\n", title)
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.options.styled { text.bold().to_string() } else { text.to_string() }
    }

    fn dim(&self, text: &str) -> String {
        if self.options.styled { text.dimmed().to_string() } else { text.to_string() }
    }
}

pub fn authors_line(authors: &[String]) -> String {
    let named: Vec<&str> = authors
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if named.is_empty() {
        "Unknown Authors".to_string()
    } else {
        named.join(", ")
    }
}

/// Landing text: what the tool does and how to use it
pub fn render_home() -> String {
    let features = [
        (
            "Multi-Source Input",
            "Upload PDFs, enter DOIs, or provide URLs to process research papers from various sources.",
        ),
        (
            "AI-Powered Analysis",
            "Agents classify topics, generate summaries, and create a cross-paper synthesis.",
        ),
        (
            "Podcast Generation",
            "Research summaries are turned into audio podcasts for easy listening.",
        ),
        ("Citation Tracking", "Every processed source is listed with its topic and summary."),
    ];
    let steps = [
        ("Upload & Input", "paperpilot upload --file paper.pdf --dois 10.1038/nature12373"),
        ("Analysis", "papers are classified, summarized and synthesized by the service"),
        ("Listen & Learn", "paperpilot results, then paperpilot download --all"),
    ];

    let mut out = String::new();
    out.push_str("PaperPilot\n\n");
    out.push_str("Transform research papers into podcast summaries.\n\n");
    for (title, description) in features {
        let _ = writeln!(out, "  * {}: {}", title, description);
    }
    out.push_str("\nHow it works:\n");
    for (index, (title, description)) in steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} - {}", index + 1, title, description);
    }
    out
}
