// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use mediabridge_config::{Config, ConfigManager, LogLevel};
use std::path::PathBuf;

mod commands;
mod replay;

fn build_cli() -> Command {
    Command::new("mediabridge")
        .version(env!("CARGO_PKG_VERSION"))
        .author("mediabridge developers")
        .about("Playback backend tools: chapter probing, configuration and session replay")
        .arg(
            Arg::new("config-dir")
                .short('c')
                .long("config-dir")
                .value_name("DIR")
                .help("Directory holding config.toml (defaults to the platform config dir)")
                .global(true),
        )
        .subcommand(
            Command::new("chapters")
                .about("List the chapters of a media file")
                .arg(Arg::new("path").required(true).value_name("FILE").help("Media file to probe"))
                .arg(Arg::new("probe").short('p').long("probe").value_name("PROGRAM").help("Probe program to run instead of the configured one"))
                .arg(Arg::new("json").long("json").help("Print chapters as JSON").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write the default configuration if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("validate").about("Check the configuration file for invalid values"))
                .subcommand(Command::new("path").about("Print the configuration file location"))
                .subcommand(Command::new("reset").about("Overwrite the configuration with defaults")),
        )
        .subcommand(
            Command::new("replay")
                .about("Drive a media object with a scripted engine session and print its events")
                .arg(Arg::new("script").required(true).value_name("SCRIPT").help("JSON session script"))
                .arg(Arg::new("json").long("json").help("Print events as JSON lines").action(ArgAction::SetTrue)),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let manager = match matches.get_one::<String>("config-dir") {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir)),
        None => ConfigManager::new(),
    }
    .context("Failed to locate configuration directory")?;

    let loaded = manager.load_with_env_overrides();
    let filter = loaded
        .as_ref()
        .map(|config| config.app.log_filter())
        .unwrap_or(LogLevel::Info);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter.to_string()))
        .init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    });

    match matches.subcommand() {
        Some(("chapters", sub_matches)) => commands::show_chapters(&config, sub_matches),
        Some(("config", sub_matches)) => commands::config_command(&manager, &config, sub_matches),
        Some(("replay", sub_matches)) => commands::replay_script(&config, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_chapters_args() {
        let matches = build_cli()
            .try_get_matches_from(["mediabridge", "chapters", "/media/book.m4b", "--json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "chapters");
        assert_eq!(sub.get_one::<String>("path").unwrap(), "/media/book.m4b");
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_config_requires_subcommand() {
        assert!(build_cli()
            .try_get_matches_from(["mediabridge", "config"])
            .is_err());
    }

    #[test]
    fn test_global_config_dir() {
        let matches = build_cli()
            .try_get_matches_from(["mediabridge", "--config-dir", "/tmp/mb", "config", "path"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("config-dir").unwrap(), "/tmp/mb");
        assert_eq!(matches.subcommand_name(), Some("config"));
    }
}
