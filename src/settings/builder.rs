//! Builder for constructing Settings.

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use super::{ModuleFormat, Platform, Settings};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building pipeline settings with validation.
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
///     .minify(true)
///     .external("node-pty")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    platform: Option<Platform>,
    format: Option<ModuleFormat>,
    source_maps: bool,
    minify: bool,
    externals: Vec<String>,
    out_dir: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the target platform.
    ///
    /// Default: [`Platform::Node`]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the output module format.
    ///
    /// Default: [`ModuleFormat::CommonJs`]
    pub fn format(mut self, format: ModuleFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Enables or disables per-module origin annotations.
    ///
    /// Default: disabled
    pub fn source_maps(mut self, enabled: bool) -> Self {
        self.source_maps = enabled;
        self
    }

    /// Enables or disables minification.
    ///
    /// Default: disabled
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    /// Declares one module specifier as external.
    ///
    /// May be called multiple times; each call adds one specifier.
    pub fn external(mut self, specifier: impl Into<String>) -> Self {
        self.externals.push(specifier.into());
        self
    }

    /// Sets the output directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `out_dir` was not set.
    pub fn build(self) -> crate::Result<Settings> {
        let out_dir = self
            .out_dir
            .ok_or_else(|| anyhow!("out_dir is required"))?;

        Ok(Settings::new(
            self.platform.unwrap_or(Platform::Node),
            self.format.unwrap_or(ModuleFormat::CommonJs),
            self.source_maps,
            self.minify,
            self.externals,
            out_dir,
        ))
    }
}
