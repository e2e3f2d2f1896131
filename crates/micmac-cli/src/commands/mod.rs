//! Command implementations.

pub mod analyze;
pub mod config;
pub mod plot;
pub mod template;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::plot::execute_plot;
pub use self::template::execute_template;

use crate::cli::EngineArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use micmac_domain::{EngineConfig, MicmacEngine};
use std::fs;
use std::path::Path;

/// Merge command-line engine overrides over the configured engine section.
pub fn engine_config(config: &Config, args: &EngineArgs) -> EngineConfig {
    let mut engine = config.engine.clone();
    if let Some(depth) = args.depth {
        engine = engine.with_truncation_depth(depth);
    }
    if let Some(max) = args.max_variables {
        engine = engine.with_max_variables(max);
    }
    if let Some(basis) = args.weight_basis {
        engine = engine.with_weight_basis(basis.into());
    }
    engine
}

/// Build an engine from the configuration and command-line overrides.
pub fn build_engine(config: &Config, args: &EngineArgs) -> Result<MicmacEngine> {
    Ok(MicmacEngine::new(engine_config(config, args))?)
}

/// Write command output to a file.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut contents = contents.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| {
        CliError::InvalidInput(format!("Cannot write {}: {}", path.display(), e))
    })?;

    tracing::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::WeightBasisArg;
    use micmac_domain::WeightBasis;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.engine.truncation_depth = 3;
        config.engine.max_variables = 20;

        let args = EngineArgs {
            depth: Some(8),
            max_variables: None,
            weight_basis: Some(WeightBasisArg::MaximumStrength),
        };

        let engine = engine_config(&config, &args);
        assert_eq!(engine.truncation_depth, 8);
        assert_eq!(engine.max_variables, 20);
        assert_eq!(engine.weight_basis, WeightBasis::MaximumStrength);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = EngineArgs {
            depth: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            build_engine(&Config::default(), &args),
            Err(CliError::Analysis(_))
        ));
    }
}
