//! Diagnostic reporting for install runs.
//!
//! The installer never writes to a global logger directly. Callers hand it a
//! [`Reporter`] and decide where events end up.

use std::path::Path;

use crate::installer::InstallOutcome;

/// Output verbosity requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Progress and summary lines
    #[default]
    Normal,
    /// Everything, including the list of installed files
    Verbose,
}

impl Verbosity {
    /// Pick a level from the `--verbose` / `--quiet` flags (quiet wins)
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Warn,
            Verbosity::Normal => log::LevelFilter::Info,
            Verbosity::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Something that happened during resolution or installation
#[derive(Debug)]
pub enum InstallEvent<'a> {
    /// A manifest entry is absent from the source root
    MissingAsset { name: &'a str },
    /// Preconditions passed, copying is about to start
    Started { target: &'a Path },
    /// One asset landed in the target directory
    Copied { name: &'a str },
    /// One asset could not be copied; the run stops here
    CopyFailed { name: &'a str, error: &'a str },
    /// All resolved assets were copied
    Finished { outcome: &'a InstallOutcome },
}

/// Sink for install events
pub trait Reporter {
    fn report(&mut self, event: InstallEvent<'_>);
}

/// Reporter that forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter {
    verbosity: Verbosity,
}

impl LogReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, event: InstallEvent<'_>) {
        match event {
            InstallEvent::MissingAsset { name } => {
                log::warn!("{name} not found in package");
            }
            InstallEvent::Started { target } => {
                log::info!(
                    "Installing Doxygen Awesome CSS files to '{}'...",
                    target.display()
                );
            }
            InstallEvent::Copied { name } => {
                log::debug!("Copied: {name}");
            }
            InstallEvent::CopyFailed { name, error } => {
                log::error!("Error copying {name}: {error}");
            }
            InstallEvent::Finished { outcome } => {
                log::info!(
                    "Successfully installed {} files to '{}'",
                    outcome.copied,
                    outcome.target.display()
                );
                if self.verbosity == Verbosity::Verbose {
                    log::debug!("Installed files:");
                    for asset in &outcome.assets {
                        log::debug!("  - {}", asset.name);
                    }
                }
            }
        }
    }
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: InstallEvent<'_>) {}
}

/// Reporter that keeps rendered events in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub copied: Vec<String>,
    pub finished: Option<usize>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: InstallEvent<'_>) {
        match event {
            InstallEvent::MissingAsset { name } => self.warnings.push(name.to_string()),
            InstallEvent::Started { .. } => {}
            InstallEvent::Copied { name } => self.copied.push(name.to_string()),
            InstallEvent::CopyFailed { name, error } => {
                self.errors.push(format!("{name}: {error}"));
            }
            InstallEvent::Finished { outcome } => self.finished = Some(outcome.copied),
        }
    }
}
