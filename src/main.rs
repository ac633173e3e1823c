//! Bundle Pipeline - fixed-function artifact bundler.
//!
//! This binary produces one self-contained bundle per configured entry point
//! (hook-handler, server, configure, status) with a shared bundling policy
//! and aborts the whole run on the first artifact that fails to build.

use std::process;

use bundle_pipeline::{
    artifacts,
    engine::InlineEngine,
    pipeline::{self, Pipeline},
    settings::{ModuleFormat, Platform, SettingsBuilder},
};

#[tokio::main]
async fn main() {
    // Initialize logging; building announcements and warnings are part of
    // the console contract, so default to info unless RUST_LOG overrides.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run the pipeline and get exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

/// Builds the fixed settings, runs the pipeline, prints the summary.
async fn run() -> bundle_pipeline::Result<i32> {
    let settings = SettingsBuilder::new()
        .out_dir("dist")
        .platform(Platform::Node)
        .format(ModuleFormat::CommonJs)
        .minify(true)
        .source_maps(false)
        .external("node-pty")
        .build()?;

    let pipeline = Pipeline::new(settings, InlineEngine::new());
    let produced = pipeline.run(&artifacts::manifest()).await?;

    print!("{}", pipeline::summary(&produced));
    Ok(0)
}
