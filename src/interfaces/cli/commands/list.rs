use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::my_links::MyLinks;

pub async fn run(config: &Config, limit: usize, offset: usize) -> Result<(), CliError> {
    let client = ApiClient::new(&config.api.base_url);
    let links = client.list(limit, offset).await?;
    let my_links = MyLinks::load(&config.client.my_links_path);

    if links.is_empty() {
        println!("{}", "No short links found".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} short link(s)", links.len()).bold()
    );
    for link in &links {
        let mine = if my_links.contains(&link.short_code) {
            " (mine)".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {}{}  {} click(s)",
            link.short_code.cyan().bold(),
            mine,
            link.clicks
        );
        println!(
            "    {} {}",
            "->".dimmed(),
            link.original_url.blue()
        );
        println!(
            "    {} {}",
            "created".dimmed(),
            link.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    Ok(())
}
