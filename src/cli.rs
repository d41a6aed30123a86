//! CLI argument parsing for cesta

use crate::analysis::AnalysisMode;
use crate::inference::VarianceAssumption;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Self-contained HTML report
    Html,
}

/// Variance assumption of the two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VarianceArg {
    /// Equal variances (Student)
    Pooled,
    /// Unequal variances (Welch)
    Welch,
}

impl From<VarianceArg> for VarianceAssumption {
    fn from(arg: VarianceArg) -> Self {
        match arg {
            VarianceArg::Pooled => VarianceAssumption::Pooled,
            VarianceArg::Welch => VarianceAssumption::Welch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cesta")]
#[command(version)]
#[command(about = "Statistical analysis of basic food basket prices in Rio Grande do Norte", long_about = None)]
pub struct Cli {
    /// Directory holding tabela_igor.csv, tabela_gladson.csv and tabela_ibge.csv
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the three CSV tables (run before any analysis)
    Prepare,

    /// List the valid selections
    List {
        #[arg(value_enum)]
        what: ListTarget,
    },

    /// Run one analysis panel
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Items present in the price tables
    Items,
    /// Municipalities of the IBGE table, sorted
    Municipalities,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file with inference parameters
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Confidence level of the interval estimate (overrides config)
    #[arg(long = "confidence", value_name = "LEVEL")]
    pub confidence: Option<f64>,

    /// Significance level of the t-test (overrides config)
    #[arg(long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Variance assumption of the t-test (overrides config)
    #[arg(long = "variance", value_enum)]
    pub variance: Option<VarianceArg>,

    #[command(subcommand)]
    pub panel: Panel,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Weekly price comparison of one item
    Trend { item: String },
    /// Frequency distribution, descriptive statistics, interval and t-test
    Lab { item: String },
    /// IBGE indicators of one municipality
    Socio { municipality: String },
}

impl From<Panel> for AnalysisMode {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::Trend { item } => AnalysisMode::Trend { item },
            Panel::Lab { item } => AnalysisMode::Lab { item },
            Panel::Socio { municipality } => AnalysisMode::Socioeconomic { municipality },
        }
    }
}
