use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use declina_compiler::{compile, load_source, write_blob};
use declina_morph::{DeclensionFactory, FactoryConfig};
use log::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Validates a JSON dictionary and compiles it to an rkyv blob")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE", required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Factory settings in TOML
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Compile for this locale instead of the one named in the input
    #[arg(short, long)]
    language: Option<String>,

    /// Validate only; write nothing
    #[arg(long)]
    check: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => FactoryConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => FactoryConfig::default(),
    };
    let source = load_source(&cli.input)?;
    if config.languages.is_empty() {
        // Only the target language and its fallbacks are needed.
        config.languages = vec![cli.language.clone().unwrap_or_else(|| source.language.clone())];
    }
    let factory = DeclensionFactory::new(config)?;

    let report = compile(&source, &factory, cli.language.as_deref())?;
    for word in &report.rejected {
        error!("{word} failed validation");
    }
    info!("{} words accepted, {} rejected", report.blob.words.len(), report.rejected.len());

    if let (false, Some(output)) = (cli.check, &cli.output) {
        let size = write_blob(&report.blob, output)?;
        info!("wrote {size} bytes to {}", output.display());
    }
    Ok(report.is_clean())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
