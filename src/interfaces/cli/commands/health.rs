use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::interfaces::cli::CliError;

pub async fn run(config: &Config) -> Result<(), CliError> {
    let client = ApiClient::new(&config.api.base_url);
    if client.check_health().await {
        println!("{} {}", "API reachable:".green().bold(), client.base_url());
        Ok(())
    } else {
        Err(CliError::ApiError(format!(
            "API not reachable at {}",
            client.base_url()
        )))
    }
}
