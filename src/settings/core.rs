//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

use super::{ModuleFormat, Platform};

/// Main settings for a pipeline run.
///
/// Central configuration for the pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Applied identically to every
/// artifact and never mutated across iterations.
///
/// # Examples
///
/// ```no_run
/// use bundle_pipeline::settings::{ModuleFormat, Platform, SettingsBuilder};
///
/// # fn example() -> bundle_pipeline::Result<()> {
/// let settings = SettingsBuilder::new()
///     .out_dir("dist")
///     .platform(Platform::Node)
///     .format(ModuleFormat::CommonJs)
///     .external("node-pty")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Host runtime the bundles target.
    platform: Platform,

    /// Output module format. Determines the output file extension.
    format: ModuleFormat,

    /// Whether embedded modules are preceded by origin annotations.
    source_maps: bool,

    /// Whether blank lines and full-line comments are stripped.
    minify: bool,

    /// Module specifiers resolved by the host at run time.
    ///
    /// These are never embedded; their import statements survive verbatim
    /// in the output.
    externals: Vec<String>,

    /// Output directory, fully reset before any artifact is built.
    out_dir: PathBuf,
}

impl Settings {
    /// Returns the target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the output module format.
    pub fn format(&self) -> ModuleFormat {
        self.format
    }

    /// Returns true if origin annotations are emitted for embedded modules.
    pub fn source_maps(&self) -> bool {
        self.source_maps
    }

    /// Returns true if blank lines and full-line comments are stripped.
    pub fn minify(&self) -> bool {
        self.minify
    }

    /// Returns the declared external module specifiers.
    pub fn externals(&self) -> &[String] {
        &self.externals
    }

    /// Returns true if the given specifier is declared external.
    pub fn is_external(&self, specifier: &str) -> bool {
        self.externals.iter().any(|e| e == specifier)
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        platform: Platform,
        format: ModuleFormat,
        source_maps: bool,
        minify: bool,
        externals: Vec<String>,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            platform,
            format,
            source_maps,
            minify,
            externals,
            out_dir,
        }
    }
}
