use super::args::Cli;
use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;
use typedump_sdk::config::resolve_config_path;
use typedump_sdk::{DumpConfig, Dumper};
use typedump_types::Value;

const STDIN_LABEL: &str = "stdin";

pub fn run(cli: Cli) -> Result<()> {
    let config = effective_config(&cli)?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let dumper = Dumper::new(config);
    let mut stdout = io::stdout().lock();

    let sources: Vec<Option<&Path>> = if cli.files.is_empty() {
        vec![None]
    } else {
        cli.files
            .iter()
            .map(|path| (path.as_os_str() != "-").then_some(path.as_path()))
            .collect()
    };

    for source in sources {
        let (label, content) = read_source(source)?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", label))?;
        tracing::debug!(input = %label, "dumping document");

        let title = cli.title.clone().unwrap_or(label);
        let mut text = dumper.compose(&Value::from(json), &title);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        stdout.write_all(text.as_bytes())?;
    }

    stdout.flush()?;
    Ok(())
}

/// Config file values overridden by command line flags
fn effective_config(cli: &Cli) -> Result<DumpConfig> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut config = DumpConfig::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    if let Some(indent) = cli.indent {
        config.indent_width = indent;
    }
    if cli.no_border {
        config.include_border = false;
    }

    // The CLI's own call stack is of no interest to the reader.
    config.include_call_trail = false;
    config.return_as_string = true;
    Ok(config)
}

fn read_source(source: Option<&Path>) -> Result<(String, String)> {
    match source {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), content))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok((STDIN_LABEL.to_string(), content))
        }
    }
}
