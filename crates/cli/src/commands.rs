// FILE: crates/cli/src/commands.rs

use crate::replay::{run_script, ReplayScript};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use media_object::{Chapter, ChapterProbe, ChapterProber, MediaEvent};
use mediabridge_config::{Config, ConfigManager};
use std::path::PathBuf;


/// List the chapters of a media file
pub fn show_chapters(config: &Config, matches: &ArgMatches) -> Result<()> {
    let file_path = matches
        .get_one::<String>("path")
        .ok_or_else(|| anyhow::anyhow!("File path is required"))?;

    let path = PathBuf::from(file_path);
    if !path.exists() {
        bail!("File not found: {}", file_path);
    }

    let prober = match matches.get_one::<String>("probe") {
        Some(program) => ChapterProber::new(program),
        None => ChapterProber::from_config(&config.probe),
    };

    let chapters = prober
        .try_probe(&path)
        .with_context(|| format!("Failed to probe chapters of {}", file_path))?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
        return Ok(());
    }

    if chapters.is_empty() {
        println!("No chapters in {}", file_path);
        return Ok(());
    }

    println!("\n{} Chapters in {}", style(chapters.len()).bold().cyan(), file_path);
    println!("{}", "=".repeat(60));
    for line in chapter_table(&chapters) {
        println!("{}", line);
    }

    Ok(())
}

/// Manage the configuration file
pub fn config_command(manager: &ConfigManager, config: &Config, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => {
            if manager.initialize().context("Failed to write configuration")? {
                println!(
                    "{} Wrote default configuration to {}",
                    style("✓").green().bold(),
                    manager.config_path().display()
                );
            } else {
                println!("Configuration already exists at {}", manager.config_path().display());
            }
        }
        Some(("show", _)) => {
            let text = toml_text(config)?;
            print!("{}", text);
        }
        Some(("validate", _)) => {
            let problems = manager.validate().context("Failed to read configuration")?;
            if problems.is_empty() {
                println!("{} Configuration is valid", style("✓").green().bold());
            } else {
                println!("{} {} problem(s):", style("✗").red().bold(), problems.len());
                for problem in &problems {
                    println!("  - {}", problem);
                }
                bail!("Configuration has {} invalid value(s)", problems.len());
            }
        }
        Some(("path", _)) => println!("{}", manager.config_path().display()),
        Some(("reset", _)) => {
            manager.reset().context("Failed to reset configuration")?;
            println!("{} Configuration reset to defaults", style("✓").green().bold());
        }
        _ => bail!("Unknown config subcommand"),
    }
    Ok(())
}

/// Drive a media object from a replay script and print the events
pub fn replay_script(config: &Config, matches: &ArgMatches) -> Result<()> {
    let script_path = matches
        .get_one::<String>("script")
        .ok_or_else(|| anyhow::anyhow!("Script path is required"))?;

    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read {}", script_path))?;
    let script = ReplayScript::from_json(&text)?;
    let events = run_script(script, config)?;

    let as_json = matches.get_flag("json");
    for event in &events {
        if as_json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}", describe_event(event));
        }
    }

    Ok(())
}

fn toml_text(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// One line per chapter: index, start, end and length
pub(crate) fn chapter_table(chapters: &[Chapter]) -> Vec<String> {
    chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| {
            format!(
                "{:>3}  {}  ->  {}  ({})",
                index,
                format_timestamp(chapter.start_ms),
                format_timestamp(chapter.end_ms),
                format_timestamp(chapter.duration_ms())
            )
        })
        .collect()
}

/// Formats milliseconds as `H:MM:SS.mmm`
pub(crate) fn format_timestamp(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    format!("{}{}:{:02}:{:02}.{:03}", sign, hours, minutes, seconds, millis)
}

pub(crate) fn describe_event(event: &MediaEvent) -> String {
    match event {
        MediaEvent::StateChanged {
            new_state,
            old_state,
        } => format!("{} {} -> {}", style("state").bold(), old_state, new_state),
        MediaEvent::Tick { position_ms } => format!("tick {}", format_timestamp(*position_ms)),
        MediaEvent::PrefinishMarkReached { remaining_ms } => {
            format!("prefinish mark, {} left", format_timestamp(*remaining_ms))
        }
        MediaEvent::ChapterChanged { index } => {
            format!("{} {}", style("chapter").bold(), index)
        }
        MediaEvent::CurrentSourceChanged { source } => format!("source {}", source),
        MediaEvent::MetaDataChanged { tags } => {
            let present: Vec<_> = tags
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            format!("metadata {}", present.join(", "))
        }
        other => format!("{:?}", other),
    }
}
