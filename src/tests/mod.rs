pub mod pipeline_tests;

use crate::models::analysis::{ AnalysisResult, AudioInfo, Citation, Paper, Statistics, Synthesis };

/// A response shaped like the one the analysis service sends back
pub(crate) const SAMPLE_RESPONSE: &str = r#"{
  "session_id": "3f1c2a9e-0b7d-4c55-9a61-2f0e8d7c6b5a",
  "papers": [
    {
      "title": "uploads/attention",
      "authors": [],
      "topic": "machine learning",
      "summary": "The Transformer relies entirely on attention, dispensing with recurrence.",
      "audio_file": "attention.mp3",
      "source": "uploads/attention.pdf"
    },
    {
      "title": "10.1038/nature12373",
      "authors": [],
      "topic": "Unspecified",
      "summary": "Nanometre-scale thermometry in a living cell.",
      "audio_file": null,
      "source": "10.1038/nature12373"
    }
  ],
  "synthesis": {
    "text": "Both papers push measurement precision further.",
    "num_papers": 2,
    "type": "cross-paper synthesis"
  },
  "audio": { "podcast_file": "final_synthesis.mp3" },
  "statistics": {
    "total_papers": 2,
    "successful_summaries": 2,
    "successful_audio_files": 1,
    "podcast_created": true
  },
  "citations": [
    {
      "source": "uploads/attention.pdf",
      "topic": "machine learning",
      "audio": "outputs/attention.mp3",
      "summary": "The Transformer relies entirely on attention, dispensing with recurrence."
    },
    {
      "source": "10.1038/nature12373",
      "topic": "Unspecified",
      "audio": "outputs/10.1038_nature12373.mp3",
      "summary": ""
    }
  ]
}"#;

pub(crate) fn sample_result() -> AnalysisResult {
    AnalysisResult {
        session_id: "session-1".to_string(),
        papers: vec![
            Paper {
                title: "Attention Is All You Need".to_string(),
                topic: "machine learning".to_string(),
                authors: vec!["Vaswani".to_string(), "Shazeer".to_string()],
                source: "uploads/attention.pdf".to_string(),
                summary: "The Transformer relies entirely on attention.".to_string(),
                audio_file: Some("attention.mp3".to_string()),
            },
            Paper {
                title: "Nanometre-scale thermometry".to_string(),
                topic: "Unspecified".to_string(),
                authors: vec![],
                source: "10.1038/nature12373".to_string(),
                summary: "Thermometry in a living cell.".to_string(),
                audio_file: None,
            }
        ],
        synthesis: Some(Synthesis {
            text: "Both papers push measurement precision further.".to_string(),
            num_papers: 2,
            kind: "cross-paper synthesis".to_string(),
        }),
        citations: Some(
            vec![Citation {
                source: "10.1038/nature12373".to_string(),
                topic: "Unspecified".to_string(),
                summary: String::new(),
            }]
        ),
        statistics: Statistics {
            total_papers: 2,
            successful_summaries: 2,
            successful_audio_files: 1,
            podcast_created: true,
        },
        audio: AudioInfo {
            podcast_file: Some("final_synthesis.mp3".to_string()),
            podcast_duration: Some(150.0),
        },
    }
}

/// Write a small file with the given name into `dir`
pub(crate) fn touch(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4\n%fake\n").expect("write fixture");
    path
}
