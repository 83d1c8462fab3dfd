//! Asset installation into a caller-supplied directory.
//!
//! Two entry points share the manifest:
//! - [`Installer::install`] copies whatever part of the manifest the package
//!   actually ships into an existing target directory
//! - [`stage_assets`] is the packaging step and insists on every file

use std::fs;
use std::path::{Path, PathBuf};

use crate::copier::copy_file;
use crate::error::InstallError;
use crate::manifest::{resolve_assets, ResolvedAsset, ASSET_FILES};
use crate::report::{InstallEvent, Reporter};

/// Result of a completed install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Number of files copied
    pub copied: usize,
    /// Assets that were resolved and installed
    pub assets: Vec<ResolvedAsset>,
    /// Directory the assets were installed into
    pub target: PathBuf,
}

/// Copies the theme assets from a package root into target directories
#[derive(Debug, Clone)]
pub struct Installer {
    source_root: PathBuf,
    manifest: &'static [&'static str],
}

impl Installer {
    /// Installer for the standard theme manifest
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self::with_manifest(source_root, ASSET_FILES)
    }

    pub fn with_manifest(
        source_root: impl Into<PathBuf>,
        manifest: &'static [&'static str],
    ) -> Self {
        Self {
            source_root: source_root.into(),
            manifest,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn manifest(&self) -> &'static [&'static str] {
        self.manifest
    }

    /// Manifest entries present in the package
    pub fn resolve(&self, reporter: &mut dyn Reporter) -> Vec<ResolvedAsset> {
        resolve_assets(&self.source_root, self.manifest, reporter)
    }

    /// Install the resolved assets into `target`.
    ///
    /// Nothing is written unless `target` is an existing directory and at
    /// least one asset resolves. A failed copy stops the run; files copied
    /// before it stay in place.
    pub fn install(
        &self,
        target: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<InstallOutcome, InstallError> {
        if !target.exists() {
            return Err(InstallError::TargetNotFound {
                path: target.to_path_buf(),
            });
        }
        if !target.is_dir() {
            return Err(InstallError::NotADirectory {
                path: target.to_path_buf(),
            });
        }

        let assets = self.resolve(reporter);
        if assets.is_empty() {
            return Err(InstallError::NoAssets {
                source_root: self.source_root.clone(),
            });
        }

        reporter.report(InstallEvent::Started { target });

        let mut copied = 0usize;
        for asset in &assets {
            let dst = target.join(&asset.name);
            if let Err(e) = copy_file(&asset.name, &asset.source, &dst) {
                let error = match &e {
                    InstallError::CopyFailed { source, .. }
                    | InstallError::DiskFull { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                reporter.report(InstallEvent::CopyFailed {
                    name: &asset.name,
                    error: &error,
                });
                return Err(e);
            }
            reporter.report(InstallEvent::Copied { name: &asset.name });
            copied += 1;
        }

        let outcome = InstallOutcome {
            copied,
            assets,
            target: target.to_path_buf(),
        };
        reporter.report(InstallEvent::Finished { outcome: &outcome });

        Ok(outcome)
    }
}

/// Copy every manifest file from `project_root` into `package_root`.
///
/// Used when building a distributable package. Unlike [`Installer::install`]
/// a missing file is fatal, and the check runs before anything is copied.
/// `package_root` is created if needed.
pub fn stage_assets(
    project_root: &Path,
    package_root: &Path,
    manifest: &[&str],
) -> Result<usize, InstallError> {
    if let Some(name) = manifest.iter().find(|n| !project_root.join(n).is_file()) {
        return Err(InstallError::AssetMissing {
            path: project_root.join(name),
        });
    }

    fs::create_dir_all(package_root).map_err(|e| InstallError::CreateDirFailed {
        path: package_root.to_path_buf(),
        source: e,
    })?;

    for name in manifest {
        copy_file(name, &project_root.join(name), &package_root.join(name))?;
        log::debug!("Staged: {name}");
    }

    Ok(manifest.len())
}
