use anyhow::{Context, Result};
use clap::Parser;
use storyshare::analysis::Analysis;
use storyshare::cli::{Cli, OutputFormat};
use storyshare::config::Config;
use storyshare::csv_output::CsvReport;
use storyshare::json_output::JsonOutput;
use storyshare::summary::TeamReport;
use storyshare::{snapshot, text_output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the config file with command-line overrides
fn load_config(args: &Cli) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };

    config.add_members(args.members.iter().cloned())?;

    if let Some(rounding) = args.rounding {
        config.allocation.rounding = rounding;
    }

    Ok(config)
}

fn render(report: &TeamReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text_output::render(report),
        OutputFormat::Json => {
            let mut json = JsonOutput::from_report(report).to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => CsvReport::new(report).to_csv(),
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let analysis = Analysis::new(load_config(&args)?)?;

    let issues = snapshot::load_issues(&args.issues)
        .with_context(|| format!("Failed to load issues: {}", args.issues.display()))?;

    let report = analysis.run(&issues);
    let rendered = render(&report, args.format)?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write report: {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}
