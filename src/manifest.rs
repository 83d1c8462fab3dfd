//! The fixed asset manifest and its resolution against a package root.

use std::path::{Path, PathBuf};

use crate::report::{InstallEvent, Reporter};

/// Files that make up the theme distribution, in install order
pub const ASSET_FILES: &[&str] = &[
    "doxygen-awesome.css",
    "doxygen-awesome-darkmode-toggle.js",
    "doxygen-awesome-fragment-copy-button.js",
    "doxygen-awesome-interactive-toc.js",
    "doxygen-awesome-paragraph-link.js",
    "doxygen-awesome-sidebar-only-darkmode-toggle.css",
    "doxygen-awesome-sidebar-only.css",
    "doxygen-awesome-tabs.js",
];

/// A manifest entry confirmed present under the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// File name as listed in the manifest
    pub name: String,
    /// Absolute location in the package
    pub source: PathBuf,
}

/// Return the manifest entries that exist directly under `source_root`.
///
/// Each missing entry is reported as a [`InstallEvent::MissingAsset`] and
/// skipped. Manifest order is preserved.
#[must_use = "this returns the resolved assets which should be installed"]
pub fn resolve_assets(
    source_root: &Path,
    manifest: &[&str],
    reporter: &mut dyn Reporter,
) -> Vec<ResolvedAsset> {
    let mut resolved = Vec::with_capacity(manifest.len());

    for &name in manifest {
        let source = source_root.join(name);
        if source.is_file() {
            resolved.push(ResolvedAsset {
                name: name.to_string(),
                source,
            });
        } else {
            reporter.report(InstallEvent::MissingAsset { name });
        }
    }

    resolved
}
