//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MICMAC - Structural analysis of cross-impact matrices.
#[derive(Debug, Parser)]
#[command(name = "micmac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MICMAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// CSV results table
    Csv,
    /// Quiet format (name and classification only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a MICMAC analysis on a matrix file
    Analyze(AnalyzeArgs),

    /// Emit the dataset for one influence/dependence plane
    Plot(PlotArgs),

    /// Write a blank matrix to fill in
    Template(TemplateArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Engine overrides shared by commands that run an analysis.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EngineArgs {
    /// Highest matrix power summed into indirect scores
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Maximum number of variables accepted
    #[arg(long)]
    pub max_variables: Option<usize>,

    /// Which cells carry the potential weight
    #[arg(long, value_enum)]
    pub weight_basis: Option<WeightBasisArg>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Matrix file (CSV or JSON)
    pub matrix: PathBuf,

    /// Matrix file format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub input_format: InputFormatArg,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also rank variables by this metric
    #[arg(short, long, value_enum)]
    pub rank: Option<MetricArg>,

    /// Write the direct plane as SVG
    #[arg(long)]
    pub direct_svg: Option<PathBuf>,

    /// Write the indirect plane as SVG
    #[arg(long)]
    pub indirect_svg: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the plot command.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Matrix file (CSV or JSON)
    pub matrix: PathBuf,

    /// Plane to emit
    #[arg(short, long, value_enum, default_value = "direct")]
    pub plane: PlaneArg,

    /// Matrix file format
    #[arg(short, long, value_enum, default_value = "auto")]
    pub input_format: InputFormatArg,

    /// Write an SVG image here instead of printing JSON
    #[arg(long)]
    pub svg: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the template command.
#[derive(Debug, Parser)]
pub struct TemplateArgs {
    /// Number of variables
    pub count: usize,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Matrix file format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormatArg {
    /// Detect from extension or content
    Auto,
    /// CSV with a header row of names
    Csv,
    /// JSON object with variables and matrix
    Json,
}

/// Plane argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlaneArg {
    /// Direct influence/dependence
    Direct,
    /// Indirect influence/dependence
    Indirect,
}

/// Ranking metric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricArg {
    /// Direct influence
    DirectInfluence,
    /// Direct dependence
    DirectDependence,
    /// Indirect influence
    IndirectInfluence,
    /// Indirect dependence
    IndirectDependence,
    /// Potential influence
    PotentialInfluence,
}

/// Weight basis argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WeightBasisArg {
    /// Only cells entered as "P"
    PotentialToken,
    /// Every cell at full strength
    MaximumStrength,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<InputFormatArg> for micmac_report::InputFormat {
    fn from(format: InputFormatArg) -> Self {
        match format {
            InputFormatArg::Auto => micmac_report::InputFormat::Auto,
            InputFormatArg::Csv => micmac_report::InputFormat::Csv,
            InputFormatArg::Json => micmac_report::InputFormat::Json,
        }
    }
}

impl From<PlaneArg> for micmac_domain::Plane {
    fn from(plane: PlaneArg) -> Self {
        match plane {
            PlaneArg::Direct => micmac_domain::Plane::Direct,
            PlaneArg::Indirect => micmac_domain::Plane::Indirect,
        }
    }
}

impl From<MetricArg> for micmac_domain::Metric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::DirectInfluence => micmac_domain::Metric::DirectInfluence,
            MetricArg::DirectDependence => micmac_domain::Metric::DirectDependence,
            MetricArg::IndirectInfluence => micmac_domain::Metric::IndirectInfluence,
            MetricArg::IndirectDependence => micmac_domain::Metric::IndirectDependence,
            MetricArg::PotentialInfluence => micmac_domain::Metric::PotentialInfluence,
        }
    }
}

impl From<WeightBasisArg> for micmac_domain::WeightBasis {
    fn from(basis: WeightBasisArg) -> Self {
        match basis {
            WeightBasisArg::PotentialToken => micmac_domain::WeightBasis::PotentialToken,
            WeightBasisArg::MaximumStrength => micmac_domain::WeightBasis::MaximumStrength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "micmac",
            "analyze",
            "matrix.csv",
            "--depth",
            "7",
            "--rank",
            "indirect-influence",
            "-f",
            "json",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.matrix, PathBuf::from("matrix.csv"));
                assert_eq!(args.engine.depth, Some(7));
                assert_eq!(args.rank, Some(MetricArg::IndirectInfluence));
                assert_eq!(args.input_format, InputFormatArg::Auto);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_plot_command_defaults() {
        let cli = Cli::parse_from(["micmac", "plot", "m.json"]);
        match cli.command {
            Command::Plot(args) => {
                assert_eq!(args.plane, PlaneArg::Direct);
                assert!(args.svg.is_none());
            }
            _ => panic!("Expected Plot command"),
        }
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["micmac", "-vv", "template", "5"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Template(TemplateArgs { count: 5, .. })));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["micmac"]).is_err());
    }

    #[test]
    fn test_conversions() {
        let metric: micmac_domain::Metric = MetricArg::PotentialInfluence.into();
        assert_eq!(metric, micmac_domain::Metric::PotentialInfluence);

        let basis: micmac_domain::WeightBasis = WeightBasisArg::MaximumStrength.into();
        assert_eq!(basis, micmac_domain::WeightBasis::MaximumStrength);
    }
}
