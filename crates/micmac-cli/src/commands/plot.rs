//! Plot command implementation.

use super::{build_engine, write_output};
use crate::cli::PlotArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use micmac_report::{render_svg, MatrixInput, PlotDocument};

/// Execute the plot command.
pub fn execute_plot(args: PlotArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let engine = build_engine(config, &args.engine)?;
    let input = MatrixInput::read_path(&args.matrix, args.input_format.into())?;
    let analysis = input.analyze(&engine)?;
    let dataset = analysis.plane(args.plane.into());

    match &args.svg {
        Some(path) => {
            write_output(path, &render_svg(&dataset))?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "{} plane written to {}",
                    dataset.plane.as_str(),
                    path.display()
                ))
            );
        }
        None => println!("{}", PlotDocument::new(&dataset).to_json()?),
    }

    Ok(())
}
