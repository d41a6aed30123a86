use anyhow::{Context, Result};
use cesta::analysis::{self, AnalysisMode, AnalysisReport};
use cesta::cli::{AnalyzeArgs, Cli, Command, ListTarget, OutputFormat};
use cesta::dataset::Dataset;
use cesta::html_output::HtmlOutput;
use cesta::inference::InferenceConfig;
use cesta::json_output::JsonOutput;
use cesta::{csv_output, seed, socioeconomic};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the tables once; a missing file aborts the whole session
fn load_dataset(dir: &Path) -> Result<Dataset> {
    Dataset::load(dir).with_context(|| format!("Failed to load dataset from {}", dir.display()))
}

/// Resolve inference parameters: defaults, then config file, then flags
fn resolve_config(args: &AnalyzeArgs) -> Result<InferenceConfig> {
    let mut config = match &args.config {
        Some(path) => InferenceConfig::from_toml(path)?,
        None => InferenceConfig::default(),
    };

    if let Some(level) = args.confidence {
        config.confidence_level = level;
    }
    if let Some(alpha) = args.alpha {
        config.significance_level = alpha;
    }
    if let Some(variance) = args.variance {
        config.variance = variance.into();
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid inference parameters: {}", e))?;
    Ok(config)
}

fn render(report: &AnalysisReport, config: &InferenceConfig, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_report_string(),
        OutputFormat::Json => {
            let mut json = JsonOutput::new(report, config)
                .to_json()
                .context("Failed to serialize report")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => csv_output::to_csv(report)?,
        OutputFormat::Html => HtmlOutput::new(report).to_html(),
    })
}

fn run_prepare(dir: &Path) -> Result<()> {
    let dataset = seed::write_seed_files(dir)
        .with_context(|| format!("Failed to write tables into {}", dir.display()))?;
    println!(
        "Tables written to {} ({} items, {} municipalities)",
        dir.display(),
        dataset.igor.rows().len(),
        dataset.ibge.records().len()
    );
    Ok(())
}

fn run_list(dir: &Path, what: ListTarget) -> Result<()> {
    let dataset = load_dataset(dir)?;
    match what {
        ListTarget::Items => {
            for item in dataset.igor.items() {
                println!("{}", item);
            }
        }
        ListTarget::Municipalities => {
            for name in socioeconomic::municipalities(&dataset) {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

fn run_analyze(dir: &Path, args: AnalyzeArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let dataset = load_dataset(dir)?;

    let mode = AnalysisMode::from(args.panel);
    let report = analysis::run(&dataset, &mode, &config).context("Analysis failed")?;
    let rendered = render(&report, &config, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    match args.command {
        Command::Prepare => run_prepare(&args.data_dir),
        Command::List { what } => run_list(&args.data_dir, what),
        Command::Analyze(analyze) => run_analyze(&args.data_dir, analyze),
    }
}
