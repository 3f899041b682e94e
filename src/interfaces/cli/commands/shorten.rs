use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::my_links::MyLinks;
use crate::utils::{validate_custom_code, validate_target_url};

pub async fn run(config: &Config, url: &str, custom_code: Option<&str>) -> Result<(), CliError> {
    validate_target_url(url)?;
    if let Some(code) = custom_code {
        validate_custom_code(code)?;
    }

    let client = ApiClient::new(&config.api.base_url);
    let resp = client.shorten(url, custom_code).await?;

    // Display URL is reconstructed from the configured origin, not taken
    // from the backend's echo.
    let short_url = config.short_url_for(&resp.short_code);

    let mut my_links = MyLinks::load(&config.client.my_links_path);
    if let Err(err) = my_links.record(&resp.short_code) {
        // Advisory only: a persistence failure must not fail the create.
        tracing::warn!("Could not record code in advisory list: {}", err);
    }

    println!("{}", "Link created".green().bold());
    println!("  {} {}", "Code:".dimmed(), resp.short_code.cyan().bold());
    println!("  {} {}", "Short URL:".dimmed(), short_url.blue().underline());
    println!("  {} {}", "Target:".dimmed(), url);
    Ok(())
}
