//! Bundling engine seam.
//!
//! The pipeline never bundles anything itself: it hands each artifact to a
//! [`BundleEngine`] together with the shared settings and inspects the
//! returned [`BuildReport`]. Keeping the engine behind a trait lets tests
//! drive the orchestration with scripted engines.

mod inline;

pub use inline::InlineEngine;

use std::future::Future;

use crate::{artifacts::ArtifactDescriptor, error::Result, settings::Settings};

/// Per-artifact outcome of one engine invocation.
///
/// Created during the build of one artifact, inspected immediately after,
/// and discarded once reported. Errors are fatal to the whole run; warnings
/// are informational only.
#[derive(Clone, Debug)]
pub struct BuildReport {
    artifact: String,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl BuildReport {
    /// Creates an empty report for the named artifact.
    pub fn new(artifact: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns the artifact name this report belongs to.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Records one build error.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records one build warning.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns the recorded errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the recorded warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if at least one error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the report, yielding the error list.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// The underlying tool that performs dependency resolution, tree assembly,
/// and output emission for a single entry point.
///
/// A structured build failure belongs in the report's error list, not in
/// `Err`: the `Err` path is reserved for failures outside the engine's
/// error-reporting contract (I/O on the output path, a panicked worker).
/// When the report carries errors, no output file may be written.
pub trait BundleEngine {
    /// Bundles one artifact under the shared settings.
    fn bundle(
        &self,
        settings: &Settings,
        artifact: &ArtifactDescriptor,
    ) -> impl Future<Output = Result<BuildReport>> + Send;
}
