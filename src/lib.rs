//! # Doxygen Awesome CSS
//!
//! Installer for the Doxygen Awesome CSS theme.
//!
//! The theme ships as a fixed set of stylesheets and scripts. This library
//! copies them from the package's asset directory into a documentation
//! output directory, reporting progress through a caller-supplied
//! [`report::Reporter`].
//!
//! ## Usage
//!
//! ```ignore
//! use doxygen_awesome_css::installer::Installer;
//! use doxygen_awesome_css::report::{LogReporter, Verbosity};
//!
//! let installer = Installer::new(&assets_dir);
//! let outcome = installer.install(&docs_dir, &mut LogReporter::new(Verbosity::Normal))?;
//! ```

/// CLI configuration and argument parsing
pub mod config;

/// Single-file copy with metadata preservation
pub mod copier;

/// Error types for install operations
pub mod error;

/// Install and staging of theme assets
pub mod installer;

/// The asset manifest and its resolution
pub mod manifest;

/// Install event reporting and verbosity
pub mod report;
