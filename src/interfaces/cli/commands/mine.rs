use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::my_links::MyLinks;

pub async fn run(config: &Config, clear: bool, resync: bool) -> Result<(), CliError> {
    let mut my_links = MyLinks::load(&config.client.my_links_path);

    if clear {
        my_links
            .clear()
            .map_err(|e| CliError::LocalError(e.to_string()))?;
        println!("{}", "Advisory list cleared".green());
        return Ok(());
    }

    if resync {
        // The full listing is authoritative; a single page is not, since a
        // tracked code may live past the first page's offset.
        let client = ApiClient::new(&config.api.base_url);
        let links = client.list_all(config.client.page_size).await?;
        let server_codes: Vec<&str> = links.iter().map(|l| l.short_code.as_str()).collect();
        let pruned = my_links
            .resync(server_codes)
            .map_err(|e| CliError::LocalError(e.to_string()))?;
        println!(
            "{} ({} pruned)",
            "Advisory list resynced".green(),
            pruned
        );
    }

    if my_links.is_empty() {
        println!("{}", "No codes recorded on this machine".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} code(s) created from this machine (advisory)", my_links.len()).bold()
    );
    for code in my_links.codes() {
        println!("  {}  {}", code.cyan(), config.short_url_for(code).dimmed());
    }
    Ok(())
}
