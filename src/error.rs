use std::path::PathBuf;
use thiserror::Error;

/// Installation error types
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Target directory '{}' does not exist", path.display())]
    TargetNotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("No Doxygen Awesome CSS files found in package ({})", source_root.display())]
    NoAssets { source_root: PathBuf },

    #[error("Error copying {name}: {source}")]
    CopyFailed {
        name: String,
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error copying {name}: no space left on device for {}", path.display())]
    DiskFull {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset missing: {}", path.display())]
    AssetMissing { path: PathBuf },

    #[error("Failed to create directory: {}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`InstallError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an unusable path
    Configuration,
    /// The package itself is missing its assets
    PackageIntegrity,
    /// A filesystem operation failed mid-run
    Io,
}

impl InstallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetNotFound { .. } | Self::NotADirectory { .. } => ErrorKind::Configuration,
            Self::NoAssets { .. } | Self::AssetMissing { .. } => ErrorKind::PackageIntegrity,
            Self::CopyFailed { .. } | Self::DiskFull { .. } | Self::CreateDirFailed { .. } => {
                ErrorKind::Io
            }
        }
    }
}
