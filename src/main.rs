use clap::Parser;
use log::{ debug, info };

use paperpilot::{ PaperPilotConfig, PaperPilotError };

mod cli;
use cli::commands::upload::UploadArgs;
use cli::{ Commands, PaperPilotCli, Session };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = PaperPilotCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<PaperPilotError>() {
            Some(pilot_err) => cli::ui::report_error(pilot_err),
            None => cli::ui::print_error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}

async fn run(cli: PaperPilotCli) -> anyhow::Result<()> {
    let config = PaperPilotConfig::load(cli.config.as_deref())?;
    info!("Using analysis service at {}", config.api.base_url());

    let session = Session::new(config, cli.output_format)?;

    // Handle commands
    match cli.command {
        Commands::Home => cli::commands::home::execute(),

        Commands::Upload { files, dois, urls, topics, interactive, full } => {
            let args = UploadArgs { files, dois, urls, topics, interactive, full };
            cli::commands::upload::execute(&session, args).await
        }

        Commands::Results { full } => cli::commands::results::execute(&session, full).await,

        Commands::Download { filename, all, dir } => {
            cli::commands::download::execute(&session, filename.as_deref(), all, dir).await
        }

        Commands::Clear => cli::commands::clear::execute(&session),
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    debug!("Logger initialized with level: {}", log_level);
}
