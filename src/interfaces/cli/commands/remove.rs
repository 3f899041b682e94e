use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::my_links::MyLinks;

pub async fn run(config: &Config, short_code: &str, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(short_code)? {
        println!("Aborted");
        return Ok(());
    }

    let client = ApiClient::new(&config.api.base_url);
    client.delete(short_code).await?;

    let mut my_links = MyLinks::load(&config.client.my_links_path);
    if let Err(err) = my_links.forget(short_code) {
        tracing::warn!("Could not update advisory list: {}", err);
    }

    println!("{} {}", "Deleted".green().bold(), short_code.cyan());
    Ok(())
}

fn confirm(short_code: &str) -> Result<bool, CliError> {
    print!("Delete '{}'? [y/N] ", short_code);
    io::stdout()
        .flush()
        .map_err(|e| CliError::LocalError(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| CliError::LocalError(e.to_string()))?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
