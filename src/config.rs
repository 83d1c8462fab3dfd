//! CLI configuration and runtime settings for the installer.

use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

use crate::report::Verbosity;

/// Directory under the install prefix that holds the packaged assets
pub const SHARE_SUBDIR: &str = "share/doxygen-awesome-css";

/// Doxygen Awesome CSS - A custom CSS theme for Doxygen HTML documentation
#[derive(Parser, Debug)]
#[command(name = "doxygen-awesome-css")]
#[command(version)]
#[command(about = "Doxygen Awesome CSS - A custom CSS theme for Doxygen HTML documentation")]
#[command(after_help = "Examples:
  # Install files to current directory
  doxygen-awesome-css --install .

  # Install files with verbose output
  doxygen-awesome-css --install ./docs --verbose

  # Show version
  doxygen-awesome-css --version")]
pub struct Cli {
    /// Install CSS/JS files to the specified directory
    #[arg(long, value_name = "DIR", conflicts_with = "stage")]
    pub install: Option<PathBuf>,

    /// Copy every theme file from a source checkout into the asset directory
    #[arg(long, value_name = "SRC_DIR")]
    pub stage: Option<PathBuf>,

    /// Directory holding the packaged theme files
    #[arg(long, value_name = "DIR", env = "DOXYGEN_AWESOME_CSS_ASSETS")]
    pub assets_dir: Option<PathBuf>,

    /// Enable verbose output (DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (WARNING level)
    #[arg(short, long)]
    pub quiet: bool,
}

/// What the invocation asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Install assets into a target directory
    Install { target: PathBuf },
    /// Stage assets from a source checkout into the asset root
    Stage { project_root: PathBuf },
    /// Print the banner and exit
    Banner,
}

/// Runtime configuration parsed from CLI
#[derive(Debug, Clone)]
pub struct Config {
    pub action: Action,
    /// Where packaged assets are read from (or staged into)
    pub assets_dir: PathBuf,
    pub verbosity: Verbosity,
}

impl Config {
    /// Create Config from CLI arguments
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let action = match (cli.install, cli.stage) {
            (Some(target), _) => Action::Install { target },
            (None, Some(project_root)) => Action::Stage { project_root },
            (None, None) => Action::Banner,
        };

        let assets_dir = match cli.assets_dir {
            Some(dir) => dir,
            None => {
                let exe = env::current_exe()?;
                let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
                default_assets_dir(exe_dir)
            }
        };

        Ok(Config {
            action,
            assets_dir,
            verbosity: Verbosity::from_flags(cli.verbose, cli.quiet),
        })
    }
}

/// Locate the packaged assets relative to the directory of the executable.
///
/// Prefers `<prefix>/share/doxygen-awesome-css` for a `<prefix>/bin` layout and
/// falls back to the executable's own directory.
pub fn default_assets_dir(exe_dir: &Path) -> PathBuf {
    if let Some(prefix) = exe_dir.parent() {
        let share = prefix.join(SHARE_SUBDIR);
        if share.is_dir() {
            return share;
        }
    }
    exe_dir.to_path_buf()
}
