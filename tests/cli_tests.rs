//! CLI argument parsing tests

use clap::Parser;

use shortlink_console::cli::{Cli, Commands};

#[test]
fn test_shorten_with_and_without_custom_code() {
    let cli = Cli::try_parse_from(["shortlink-console", "shorten", "https://example.com"]).unwrap();
    match cli.command {
        Some(Commands::Shorten { url, custom_code }) => {
            assert_eq!(url, "https://example.com");
            assert!(custom_code.is_none());
        }
        _ => panic!("expected shorten command"),
    }

    let cli = Cli::try_parse_from([
        "shortlink-console",
        "shorten",
        "https://example.com",
        "docs",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Shorten { custom_code, .. }) => {
            assert_eq!(custom_code.as_deref(), Some("docs"));
        }
        _ => panic!("expected shorten command"),
    }
}

#[test]
fn test_list_pagination_defaults() {
    let cli = Cli::try_parse_from(["shortlink-console", "list"]).unwrap();
    match cli.command {
        Some(Commands::List { limit, offset }) => {
            assert_eq!(limit, 50);
            assert_eq!(offset, 0);
        }
        _ => panic!("expected list command"),
    }

    let cli = Cli::try_parse_from([
        "shortlink-console",
        "list",
        "--limit",
        "10",
        "--offset",
        "20",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::List { limit, offset }) => {
            assert_eq!(limit, 10);
            assert_eq!(offset, 20);
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn test_remove_confirmation_flag() {
    let cli = Cli::try_parse_from(["shortlink-console", "remove", "abc123"]).unwrap();
    match cli.command {
        Some(Commands::Remove { short_code, yes }) => {
            assert_eq!(short_code, "abc123");
            assert!(!yes);
        }
        _ => panic!("expected remove command"),
    }

    let cli = Cli::try_parse_from(["shortlink-console", "remove", "abc123", "-y"]).unwrap();
    match cli.command {
        Some(Commands::Remove { yes, .. }) => assert!(yes),
        _ => panic!("expected remove command"),
    }
}

#[test]
fn test_mine_clear_conflicts_with_resync() {
    assert!(Cli::try_parse_from(["shortlink-console", "mine", "--clear", "--resync"]).is_err());

    let cli = Cli::try_parse_from(["shortlink-console", "mine", "--resync"]).unwrap();
    match cli.command {
        Some(Commands::Mine { clear, resync }) => {
            assert!(!clear);
            assert!(resync);
        }
        _ => panic!("expected mine command"),
    }
}

#[test]
fn test_api_url_is_global() {
    let cli = Cli::try_parse_from([
        "shortlink-console",
        "health",
        "--api-url",
        "https://sho.rt/api",
    ])
    .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("https://sho.rt/api"));
    assert!(matches!(cli.command, Some(Commands::Health)));
}

#[test]
fn test_no_subcommand_is_allowed() {
    // Bare invocation starts the TUI (or prints help without the feature).
    let cli = Cli::try_parse_from(["shortlink-console"]).unwrap();
    assert!(cli.command.is_none());
}
