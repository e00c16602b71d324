use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

use paperpilot::{
    FileResultStore,
    HttpAnalysisService,
    PaperPilot,
    PaperPilotConfig,
    RenderOptions,
    ResultRenderer,
};

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "paperpilot",
    about = "Turn research papers into summaries, a cross-paper synthesis and podcasts",
    version,
    author,
    long_about = None
)]
pub struct PaperPilotCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what PaperPilot does and how to get started
    Home,

    /// Submit papers for analysis and show the results
    Upload {
        /// PDF file to upload (repeatable)
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,

        /// DOIs separated by commas
        #[arg(short, long)]
        dois: Option<String>,

        /// Paper URLs separated by commas
        #[arg(short, long)]
        urls: Option<String>,

        /// Optional topics for classification, separated by commas
        #[arg(short, long)]
        topics: Option<String>,

        /// Prompt for inputs even when some were given on the command line
        #[arg(short, long, default_value = "false")]
        interactive: bool,

        /// Show summaries in full
        #[arg(long, default_value = "false")]
        full: bool,
    },

    /// Show the results of the last analysis
    Results {
        /// Show summaries in full
        #[arg(long, default_value = "false")]
        full: bool,
    },

    /// Download generated audio
    Download {
        /// Audio file name from the results (omit to list what is available)
        filename: Option<String>,

        /// Download every audio file of the last analysis
        #[arg(short, long, default_value = "false")]
        all: bool,

        /// Directory to save into
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Forget the stored results
    Clear,
}

pub type Client = PaperPilot<HttpAnalysisService, FileResultStore>;

/// Everything a command needs: the client, its configuration and output settings
pub struct Session {
    pub pilot: Client,
    pub config: PaperPilotConfig,
    pub output_format: OutputFormat,
}

impl Session {
    pub fn new(config: PaperPilotConfig, output_format: OutputFormat) -> anyhow::Result<Self> {
        let service = HttpAnalysisService::new(config.api.clone())?;
        let store = FileResultStore::new(config.results_file());
        Ok(Self {
            pilot: PaperPilot::new(service, store),
            config,
            output_format,
        })
    }

    pub fn renderer(&self, full: bool) -> ResultRenderer {
        let options = RenderOptions {
            full,
            width: ui::terminal_width(),
            styled: ui::is_interactive(),
        };
        ResultRenderer::new(options, self.config.api.clone())
    }
}
