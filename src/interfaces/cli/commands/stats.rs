use chrono::Utc;
use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::insights;
use crate::interfaces::cli::CliError;

pub async fn run(config: &Config, short_code: &str) -> Result<(), CliError> {
    let client = ApiClient::new(&config.api.base_url);
    let stats = client.stats(short_code).await?;
    let now = Utc::now();

    let last_accessed = stats
        .last_accessed
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Never".to_string());

    println!(
        "{} {}",
        "Statistics for".bold(),
        stats.short_code.cyan().bold()
    );
    println!(
        "  {} {}",
        "Short URL:".dimmed(),
        config.short_url_for(&stats.short_code).blue()
    );
    println!("  {} {}", "Target:".dimmed(), stats.original_url);
    println!(
        "  {} {}",
        "Clicks:".dimmed(),
        stats.clicks.to_string().green().bold()
    );
    println!(
        "  {} {}",
        "Created:".dimmed(),
        stats.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  {} {}", "Last accessed:".dimmed(), last_accessed);
    println!(
        "  {} {}",
        "Age:".dimmed(),
        insights::age(stats.created_at, now)
    );
    println!(
        "  {} {}",
        "Average:".dimmed(),
        insights::daily_average(stats.created_at, stats.clicks, now)
    );
    println!(
        "  {} {}",
        "Status:".dimmed(),
        match insights::activity(stats.clicks) {
            "active" => "active".green(),
            other => other.yellow(),
        }
    );
    Ok(())
}
