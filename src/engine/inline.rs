//! Production bundling engine.
//!
//! [`InlineEngine`] assembles one self-contained output file per entry point
//! by embedding every reachable local module exactly once, in dependency
//! order. Declared externals are never embedded: their import statements
//! survive verbatim so the host resolves them at run time, and the consuming
//! source is expected to cope with their absence on its own.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::anyhow;
use regex::Regex;

use super::{BuildReport, BundleEngine};
use crate::{artifacts::ArtifactDescriptor, error::Result, settings::Settings};

/// Matches `import x from "name"` and bare `import "name"` lines.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*import\s+(?:.+?\s+from\s+)?["']([^"']+)["']"#).expect("valid import pattern")
});

/// Matches `require("spec")` anywhere in a line.
static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\(\s*["']([^"']+)["']\s*\)"#).expect("valid require pattern")
});

/// Engine that inlines local modules into a single output file.
///
/// Resolution rules for relative specifiers, tried in order: the exact
/// path, the path with `.js` appended, then `<path>/index.js`. Bare
/// specifiers are never resolved locally; they are either declared
/// external (kept verbatim) or reported as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineEngine;

impl InlineEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl BundleEngine for InlineEngine {
    async fn bundle(
        &self,
        settings: &Settings,
        artifact: &ArtifactDescriptor,
    ) -> Result<BuildReport> {
        let task_settings = settings.clone();
        let task_artifact = artifact.clone();

        // Module walking is blocking std::fs work; keep it off the runtime.
        let (report, bundled) =
            tokio::task::spawn_blocking(move || assemble(&task_settings, &task_artifact))
                .await
                .map_err(|e| anyhow!("bundle task panicked: {}", e))?;

        if report.has_errors() {
            return Ok(report);
        }

        let output = artifact.output_path(settings);
        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&output, &bundled).await?;
        log::debug!(
            "assembled {} ({} bytes) -> {}",
            artifact.name(),
            bundled.len(),
            output.display()
        );

        Ok(report)
    }
}

/// Walks the module graph from the entry point and assembles the bundle text.
fn assemble(settings: &Settings, artifact: &ArtifactDescriptor) -> (BuildReport, String) {
    let mut report = BuildReport::new(artifact.name());
    let mut visited = HashSet::new();
    let mut out = String::new();
    embed_module(artifact.entry(), settings, &mut visited, &mut out, &mut report);
    (report, out)
}

/// Embeds one module: dependencies first, then its own filtered body.
///
/// Each module is embedded at most once; the visited set is keyed on the
/// canonical path and marked before recursing, which also breaks import
/// cycles.
fn embed_module(
    path: &Path,
    settings: &Settings,
    visited: &mut HashSet<PathBuf>,
    out: &mut String,
    report: &mut BuildReport,
) {
    let canonical = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(e) => {
            report.push_error(format!("cannot read `{}`: {}", path.display(), e));
            return;
        }
    };
    if !visited.insert(canonical) {
        return;
    }

    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            report.push_error(format!("cannot read `{}`: {}", path.display(), e));
            return;
        }
    };

    let mut body = String::new();
    for line in text.lines() {
        if let Some(specifier) = import_specifier(line) {
            if settings.is_external(&specifier) {
                // Resolved by the host at run time; keep the reference.
                body.push_str(line);
                body.push('\n');
                continue;
            }
            if specifier.starts_with("./") || specifier.starts_with("../") {
                let dir = path.parent().unwrap_or_else(|| Path::new("."));
                match resolve_relative(dir, &specifier) {
                    Some(target) => embed_module(&target, settings, visited, out, report),
                    None => report.push_error(format!(
                        "{}: cannot resolve import \"{}\"",
                        path.display(),
                        specifier
                    )),
                }
                // Import line replaced by the embedded module above.
                continue;
            }
            report.push_warning(format!(
                "{}: \"{}\" is not declared external; the host must resolve it",
                path.display(),
                specifier
            ));
            body.push_str(line);
            body.push('\n');
            continue;
        }

        if settings.minify() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
        }
        body.push_str(line);
        body.push('\n');
    }

    if settings.source_maps() {
        out.push_str(&format!("// source: {}\n", path.display()));
    }
    out.push_str(&body);
}

/// Extracts the module specifier from an import or require line, if any.
fn import_specifier(line: &str) -> Option<String> {
    if line.trim_start().starts_with("//") {
        return None;
    }
    if let Some(captures) = IMPORT_RE.captures(line) {
        return captures.get(1).map(|m| m.as_str().to_string());
    }
    if let Some(captures) = REQUIRE_RE.captures(line) {
        return captures.get(1).map(|m| m.as_str().to_string());
    }
    None
}

/// Resolves a relative specifier against the importing module's directory.
fn resolve_relative(from_dir: &Path, specifier: &str) -> Option<PathBuf> {
    let base = from_dir.join(specifier);
    if base.is_file() {
        return Some(base);
    }

    let mut with_ext = base.clone().into_os_string();
    with_ext.push(".js");
    let with_ext = PathBuf::from(with_ext);
    if with_ext.is_file() {
        return Some(with_ext);
    }

    let index = base.join("index.js");
    if index.is_file() {
        return Some(index);
    }

    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::settings::SettingsBuilder;

    fn write(dir: &TempDir, rel: &str, content: &str) -> PathBuf {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn settings(dir: &TempDir) -> Settings {
        SettingsBuilder::new()
            .out_dir(dir.path().join("dist"))
            .build()
            .unwrap()
    }

    #[test]
    fn extracts_import_and_require_specifiers() {
        assert_eq!(
            import_specifier(r#"import { log } from "./util/log.js";"#),
            Some("./util/log.js".to_string())
        );
        assert_eq!(
            import_specifier(r#"import "./side-effect";"#),
            Some("./side-effect".to_string())
        );
        assert_eq!(
            import_specifier(r#"const pty = require("node-pty");"#),
            Some("node-pty".to_string())
        );
        assert_eq!(import_specifier(r#"// require("node-pty")"#), None);
        assert_eq!(import_specifier("const x = 1;"), None);
    }

    #[test]
    fn resolves_exact_then_extension_then_index() {
        let dir = TempDir::new().unwrap();
        write(&dir, "exact.js", "");
        write(&dir, "named.js", "");
        write(&dir, "pkg/index.js", "");

        assert_eq!(
            resolve_relative(dir.path(), "./exact.js"),
            Some(dir.path().join("exact.js"))
        );
        assert_eq!(
            resolve_relative(dir.path(), "./named"),
            Some(dir.path().join("named.js"))
        );
        assert_eq!(
            resolve_relative(dir.path(), "./pkg"),
            Some(dir.path().join("pkg/index.js"))
        );
        assert_eq!(resolve_relative(dir.path(), "./missing"), None);
    }

    #[test]
    fn dependencies_are_embedded_before_dependents() {
        let dir = TempDir::new().unwrap();
        write(&dir, "dep.js", "const DEP = 1;\n");
        let entry = write(&dir, "main.js", "import \"./dep.js\";\nconst MAIN = 2;\n");

        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, bundled) = assemble(&settings(&dir), &artifact);

        assert!(!report.has_errors());
        let dep_at = bundled.find("const DEP").unwrap();
        let main_at = bundled.find("const MAIN").unwrap();
        assert!(dep_at < main_at);
        assert!(!bundled.contains("import"));
    }

    #[test]
    fn shared_module_is_embedded_once() {
        let dir = TempDir::new().unwrap();
        write(&dir, "shared.js", "const SHARED = 1;\n");
        write(&dir, "a.js", "import \"./shared.js\";\nconst A = 1;\n");
        write(&dir, "b.js", "import \"./shared.js\";\nconst B = 1;\n");
        let entry = write(&dir, "main.js", "import \"./a.js\";\nimport \"./b.js\";\n");

        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, bundled) = assemble(&settings(&dir), &artifact);

        assert!(!report.has_errors());
        assert_eq!(bundled.matches("const SHARED").count(), 1);
    }

    #[test]
    fn import_cycles_do_not_recurse_forever() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.js", "import \"./b.js\";\nconst A = 1;\n");
        write(&dir, "b.js", "import \"./a.js\";\nconst B = 1;\n");
        let entry = dir.path().join("a.js");

        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, bundled) = assemble(&settings(&dir), &artifact);

        assert!(!report.has_errors());
        assert_eq!(bundled.matches("const A").count(), 1);
        assert_eq!(bundled.matches("const B").count(), 1);
    }

    #[test]
    fn unresolvable_local_import_is_an_error() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.js", "import \"./missing\";\n");

        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, _) = assemble(&settings(&dir), &artifact);

        assert!(report.has_errors());
        assert!(report.errors()[0].contains("./missing"));
    }

    #[test]
    fn missing_entry_is_an_error() {
        let dir = TempDir::new().unwrap();
        let artifact = ArtifactDescriptor::new("main", dir.path().join("absent.js"));
        let (report, _) = assemble(&settings(&dir), &artifact);

        assert!(report.has_errors());
    }

    #[test]
    fn declared_external_survives_verbatim() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.js", "const pty = require(\"node-pty\");\n");

        let engine_settings = SettingsBuilder::new()
            .out_dir(dir.path().join("dist"))
            .external("node-pty")
            .build()
            .unwrap();
        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, bundled) = assemble(&engine_settings, &artifact);

        assert!(!report.has_errors());
        assert!(report.warnings().is_empty());
        assert!(bundled.contains("require(\"node-pty\")"));
    }

    #[test]
    fn undeclared_bare_specifier_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.js", "const express = require(\"express\");\n");

        let artifact = ArtifactDescriptor::new("main", entry);
        let (report, bundled) = assemble(&settings(&dir), &artifact);

        assert!(!report.has_errors());
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].contains("express"));
        assert!(bundled.contains("require(\"express\")"));
    }

    #[test]
    fn minify_strips_blanks_and_comment_lines() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.js", "// header\n\nconst KEEP = 1;\n\n");

        let minified = SettingsBuilder::new()
            .out_dir(dir.path().join("dist"))
            .minify(true)
            .build()
            .unwrap();
        let artifact = ArtifactDescriptor::new("main", entry);
        let (_, bundled) = assemble(&minified, &artifact);

        assert_eq!(bundled, "const KEEP = 1;\n");
    }

    #[test]
    fn source_maps_annotate_module_origins() {
        let dir = TempDir::new().unwrap();
        write(&dir, "dep.js", "const DEP = 1;\n");
        let entry = write(&dir, "main.js", "import \"./dep.js\";\n");

        let annotated = SettingsBuilder::new()
            .out_dir(dir.path().join("dist"))
            .source_maps(true)
            .build()
            .unwrap();
        let artifact = ArtifactDescriptor::new("main", entry);
        let (_, bundled) = assemble(&annotated, &artifact);

        assert_eq!(bundled.matches("// source: ").count(), 2);
    }
}
