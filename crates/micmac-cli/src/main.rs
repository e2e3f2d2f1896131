//! micmac - command-line interface for MICMAC structural analysis.

use clap::Parser;
use micmac_cli::commands;
use micmac_cli::config::OutputFormat;
use micmac_cli::logging::init_logging;
use micmac_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Errors can occur before the config file is read, so only --no-color applies here.
    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);
    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> micmac_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled).with_decimals(config.settings.decimals);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter),
        Command::Plot(args) => commands::execute_plot(args, &config, &formatter),
        Command::Template(args) => commands::execute_template(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)
        }
    }
}
