//! Fixed-function bundle pipeline library.
//!
//! Produces one self-contained output file per configured entry point:
//! - a compile-time artifact manifest (hook-handler, server, configure, status)
//! - a shared, read-only build configuration applied to every artifact
//! - a bundling engine behind a trait seam, with a production implementation
//!   that embeds local modules and leaves declared externals to the host
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod artifacts;
pub mod checksum;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use error::{BundlerError, Result};
