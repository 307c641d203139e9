use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mdpage::logging::{self, LogConfig};
use mdpage::{Config, Overrides, Settings};

/// Exit status when the input or stylesheet file does not exist.
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser)]
#[command(name = "mdpage")]
#[command(about = "Convert a Markdown file to a styled HTML page")]
#[command(version)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// CSS file to inline into the page
    #[arg(long)]
    css: Option<PathBuf>,

    /// HTML template file [default: templates/default_template.html]
    #[arg(long)]
    template: Option<PathBuf>,

    /// JSON (or .toml) configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&LogConfig {
        verbose: cli.verbose,
    })?;

    let config = Config::load(&cli.config)?;
    let overrides = Overrides {
        css: cli.css,
        template: cli.template,
    };
    let settings = Settings::resolve(cli.input, cli.output, overrides, config);

    match mdpage::convert(&settings) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_not_found() => Ok(ExitCode::from(EXIT_NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}
