//! Template command implementation.

use super::write_output;
use crate::cli::TemplateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use micmac_domain::VariableSet;
use micmac_report::MatrixInput;

/// Execute the template command.
pub fn execute_template(args: TemplateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // Same bounds the engine enforces, so the template can be analyzed as-is.
    VariableSet::new(VariableSet::numbered_names(args.count), &config.engine)?;

    let csv = MatrixInput::blank(args.count).to_csv()?;

    match &args.output {
        Some(path) => {
            write_output(path, &csv)?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Template for {} variables written to {}",
                    args.count,
                    path.display()
                ))
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}
