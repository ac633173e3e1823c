//! Pipeline orchestration and coordination.
//!
//! This module provides the [`Pipeline`] orchestrator that resets the output
//! directory, drives the bundling engine once per artifact in manifest order,
//! and aborts the whole run on the first artifact that reports errors.

use std::path::PathBuf;

use crate::{
    artifacts::ArtifactDescriptor,
    checksum::calculate_sha256,
    engine::BundleEngine,
    error::{BundlerError, Result},
    settings::Settings,
    utils,
};

/// One successfully produced bundle.
#[derive(Clone, Debug)]
pub struct BundledArtifact {
    /// Logical artifact name.
    pub name: String,
    /// Output file path.
    pub path: PathBuf,
    /// Output file size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the output file.
    pub checksum: String,
}

/// Sequential bundle orchestrator.
///
/// Strictly sequential: one artifact at a time, each engine invocation
/// awaited to completion before the next begins. The shared settings are
/// read-only across iterations, and the output directory is reset exactly
/// once, before the first build.
///
/// # Examples
///
/// ```no_run
/// use bundle_pipeline::{artifacts, engine::InlineEngine, pipeline::Pipeline};
/// use bundle_pipeline::settings::SettingsBuilder;
///
/// # async fn example() -> bundle_pipeline::Result<()> {
/// let settings = SettingsBuilder::new().out_dir("dist").build()?;
/// let pipeline = Pipeline::new(settings, InlineEngine::new());
/// let produced = pipeline.run(&artifacts::manifest()).await?;
/// println!("{} bundles", produced.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<E> {
    settings: Settings,
    engine: E,
}

impl<E: BundleEngine> Pipeline<E> {
    /// Creates a pipeline over the given settings and engine.
    pub fn new(settings: Settings, engine: E) -> Self {
        Self { settings, engine }
    }

    /// Returns a reference to the pipeline settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the whole pipeline: clean, then build each artifact or abort.
    ///
    /// The output directory is removed (only "not found" is ignored; any
    /// other deletion failure propagates) and recreated empty before any
    /// artifact builds, so stale outputs never survive a run.
    ///
    /// # Errors
    ///
    /// Returns [`BundlerError::Build`] for the first artifact whose report
    /// carries errors; later artifacts are not attempted, and outputs
    /// produced before the failure are left in place. Any other failure
    /// (filesystem, engine invocation itself) propagates unchanged.
    pub async fn run(&self, manifest: &[ArtifactDescriptor]) -> Result<Vec<BundledArtifact>> {
        log::debug!(
            "bundling for {} ({} output)",
            self.settings.platform(),
            self.settings.format().extension()
        );

        utils::fs::create_dir_all(self.settings.out_dir(), true).await?;

        let mut produced = Vec::with_capacity(manifest.len());
        for descriptor in manifest {
            log::info!("building {}", descriptor.name());

            let report = self.engine.bundle(&self.settings, descriptor).await?;
            for warning in report.warnings() {
                log::warn!("{}: {}", report.artifact(), warning);
            }
            if report.has_errors() {
                for error in report.errors() {
                    log::error!("{}: {}", report.artifact(), error);
                }
                let artifact = report.artifact().to_string();
                return Err(BundlerError::Build {
                    artifact,
                    errors: report.into_errors(),
                });
            }

            let path = descriptor.output_path(&self.settings);
            let size = tokio::fs::metadata(&path).await?.len();
            let checksum = calculate_sha256(&path).await?;
            produced.push(BundledArtifact {
                name: descriptor.name().to_string(),
                path,
                size,
                checksum,
            });
        }

        Ok(produced)
    }
}

/// Renders the final summary: one line per produced output path.
pub fn summary(artifacts: &[BundledArtifact]) -> String {
    let mut out = String::from("produced:\n");
    for artifact in artifacts {
        out.push_str(&format!(
            "  {} ({} bytes, sha256 {})\n",
            artifact.path.display(),
            artifact.size,
            artifact.checksum
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_output_path() {
        let artifacts = vec![
            BundledArtifact {
                name: "server".to_string(),
                path: PathBuf::from("dist/server.cjs"),
                size: 42,
                checksum: "abc".to_string(),
            },
            BundledArtifact {
                name: "status".to_string(),
                path: PathBuf::from("dist/status.cjs"),
                size: 7,
                checksum: "def".to_string(),
            },
        ];

        let rendered = summary(&artifacts);
        assert!(rendered.contains("dist/server.cjs"));
        assert!(rendered.contains("dist/status.cjs"));
    }
}
