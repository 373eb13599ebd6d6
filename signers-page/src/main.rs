use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use signers_wall::names::{DEFAULT_REPEAT, parse_names, prepare_sequence};
use signers_wall::prelude::*;

mod page;

use page::{OUTPUT_FILE, PageConfig};

const PREVIEW_SAMPLE: usize = 8;

#[derive(Parser)]
#[command(name = "signers-page")]
#[command(about = "Builds the host page for the wall of signers")]
struct Cli {
    /// More output: -v for debug, -vv for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the host page into <out-dir>/index.html
    Render {
        /// YAML page config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Template to use instead of the built-in one
        #[arg(long)]
        template: Option<PathBuf>,

        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
    },

    /// Run a local CSV through list preparation and log the result
    Preview {
        csv: PathBuf,

        #[arg(long, default_value_t = DEFAULT_REPEAT)]
        repeat: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger_at(log_level(cli.verbose));

    match cli.command {
        Command::Render {
            config,
            template,
            out_dir,
        } => render(config.as_deref(), template.as_deref(), &out_dir),
        Command::Preview { csv, repeat } => preview(&csv, repeat),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn render(
    config: Option<&Path>,
    template: Option<&Path>,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let config = match config {
        Some(path) => PageConfig::load(path)?,
        None => {
            info!("No --config given; using default page config");
            PageConfig::default()
        }
    };

    let template = match template {
        Some(path) => fs::read_to_string(path).map_err(|err| {
            format!("failed to read template '{}': {}", path.display(), err)
        })?,
        None => page::builtin_template()?,
    };

    let html = page::render_template(&template, &config)?;

    fs::create_dir_all(out_dir).map_err(|err| {
        format!("failed to create '{}': {}", out_dir.display(), err)
    })?;
    let out_path = out_dir.join(OUTPUT_FILE);
    fs::write(&out_path, html).map_err(|err| {
        format!("failed to write '{}': {}", out_path.display(), err)
    })?;

    info!("Wrote {}", out_path.display());
    Ok(())
}

fn preview(csv: &Path, repeat: usize) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(csv).map_err(|err| {
        format!("failed to read '{}': {}", csv.display(), err)
    })?;

    let base = parse_names(&text);
    if base.is_empty() {
        warn!("'{}' contains no names", csv.display());
        return Ok(());
    }

    let sequence = prepare_sequence(&text, repeat.max(1), &mut rand::rng());
    let sample = sequence
        .iter()
        .take(PREVIEW_SAMPLE)
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    info!("{} names, {} entries", base.len(), sequence.len());
    info!("Starts with: {}", sample);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_log_level() {
        assert_eq!(log_level(0), LevelFilter::Info);
        assert_eq!(log_level(1), LevelFilter::Debug);
        assert_eq!(log_level(4), LevelFilter::Trace);
    }

    #[test]
    fn cli_parses_both_commands() {
        let cli = Cli::try_parse_from([
            "signers-page",
            "-vv",
            "render",
            "--config",
            "site/page.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Render { config: Some(_), template: None, .. }
        ));

        let cli =
            Cli::try_parse_from(["signers-page", "preview", "names.csv"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Preview { repeat: DEFAULT_REPEAT, .. }
        ));
    }
}
