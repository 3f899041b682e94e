use clap::Parser;
use tracing_subscriber::EnvFilter;

use shortlink_console::cli::{Cli, Commands};
use shortlink_console::config::Config;
use shortlink_console::interfaces;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    match cli.command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) | None => {
            // The TUI owns the terminal, so logs go to a file instead of
            // stderr. The appender guard must outlive the event loop.
            let _guard = init_file_logging(&config);
            if let Err(err) = interfaces::tui::run_tui(config).await {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "tui"))]
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
        Some(command) => {
            init_stderr_logging(&config);
            if let Err(err) = interfaces::cli::run_cli_command(command, config).await {
                eprintln!("{}", err.format_colored());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_stderr_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "tui")]
fn init_file_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::never(".", config.logging.file.clone());
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
