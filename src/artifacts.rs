//! Artifact manifest: the fixed mapping of logical names to entry points.

use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// A named pairing of logical artifact name and source entry path.
///
/// Immutable once constructed. The output path is not stored: it is derived
/// deterministically from the logical name and the shared settings, so two
/// runs with the same settings always target the same file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    name: String,
    entry: PathBuf,
}

impl ArtifactDescriptor {
    /// Creates a descriptor for one entry point.
    pub fn new(name: impl Into<String>, entry: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            entry: entry.into(),
        }
    }

    /// Returns the logical artifact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source entry path (the root of this artifact's
    /// dependency graph).
    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// Derives the output path for this artifact.
    ///
    /// Always `<out_dir>/<name>.<ext>`, where the extension matches the
    /// configured output module format.
    pub fn output_path(&self, settings: &Settings) -> PathBuf {
        settings
            .out_dir()
            .join(format!("{}.{}", self.name, settings.format().extension()))
    }
}

/// Returns the fixed artifact manifest, in build order.
///
/// The mapping is compile-time configuration: changing it means editing this
/// function. Enumeration order is significant: the pipeline builds in this
/// order and aborts at the first failure.
pub fn manifest() -> Vec<ArtifactDescriptor> {
    vec![
        ArtifactDescriptor::new("hook-handler", "app/hook-handler.js"),
        ArtifactDescriptor::new("server", "app/server.js"),
        ArtifactDescriptor::new("configure", "app/configure.js"),
        ArtifactDescriptor::new("status", "app/status.js"),
    ]
}
