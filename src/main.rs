use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use doxygen_awesome_css::config::{Action, Cli, Config};
use doxygen_awesome_css::error::InstallError;
use doxygen_awesome_css::installer::{stage_assets, Installer};
use doxygen_awesome_css::manifest::ASSET_FILES;
use doxygen_awesome_css::report::{LogReporter, Verbosity};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !already_reported(&e) {
                log::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Copy failures were already reported per file by the reporter
fn already_reported(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<InstallError>(),
        Some(InstallError::CopyFailed { .. } | InstallError::DiskFull { .. })
    )
}

fn init_logging(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    match config.action {
        Action::Install { target } => {
            let installer = Installer::new(&config.assets_dir);
            let mut reporter = LogReporter::new(config.verbosity);
            installer.install(&target, &mut reporter)?;
        }
        Action::Stage { project_root } => {
            let count = stage_assets(&project_root, &config.assets_dir, ASSET_FILES)
                .with_context(|| {
                    format!("Failed to stage assets from {}", project_root.display())
                })?;
            log::info!(
                "Staged {} files into '{}'",
                count,
                config.assets_dir.display()
            );
        }
        Action::Banner => {
            log::info!("Doxygen Awesome CSS - A custom CSS theme for Doxygen HTML documentation");
            log::info!("Use --help for usage information");
        }
    }

    Ok(())
}
