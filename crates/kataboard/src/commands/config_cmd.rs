//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::apply_overrides(config::load_config()?, global);
            // The output setting itself may be broken; show the file anyway
            let format = global.output.unwrap_or(OutputFormat::Table);
            let text = config::to_toml(&cfg)?;
            let out = output::render_single(format, &cfg, |_| text.clone(), |c| c.api_url.clone())?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            config::save_config(&Config::default())?;
            output::print_output(
                &format!("Wrote default configuration to {}", path.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
