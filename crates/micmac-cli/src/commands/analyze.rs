//! Analyze command implementation.

use super::{build_engine, write_output};
use crate::cli::{AnalyzeArgs, MetricArg};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use micmac_report::{render_svg, MatrixInput};
use tracing::debug;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let engine = build_engine(config, &args.engine)?;

    debug!("Reading matrix from {}", args.matrix.display());
    let input = MatrixInput::read_path(&args.matrix, args.input_format.into())?;
    let analysis = input.analyze(&engine)?;

    let mut output = formatter.format_analysis(&analysis)?;
    if let Some(warning) = ignored_rank_warning(args.rank, formatter) {
        eprintln!("{}", warning);
    } else if let Some(metric) = args.rank {
        output.push_str("\n\n");
        output.push_str(&formatter.format_ranking(&analysis, metric.into())?);
    }

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            eprintln!(
                "{}",
                formatter.success(&format!("Results written to {}", path.display()))
            );
        }
        None => println!("{}", output),
    }

    if let Some(path) = &args.direct_svg {
        write_output(path, &render_svg(&analysis.direct_plane()))?;
        eprintln!(
            "{}",
            formatter.success(&format!("Direct plane written to {}", path.display()))
        );
    }

    if let Some(path) = &args.indirect_svg {
        write_output(path, &render_svg(&analysis.indirect_plane()))?;
        eprintln!(
            "{}",
            formatter.success(&format!("Indirect plane written to {}", path.display()))
        );
    }

    Ok(())
}

/// The CSV export is a single table, so a requested ranking is dropped there.
fn ignored_rank_warning(rank: Option<MetricArg>, formatter: &Formatter) -> Option<String> {
    match (rank, formatter.format()) {
        (Some(_), OutputFormat::Csv) => {
            Some(formatter.warning("--rank is ignored with --format csv"))
        }
        _ => None,
    }
}
