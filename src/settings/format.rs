//! Target platform and output module format.

use std::fmt;

/// Host runtime the bundles are produced for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Server-side runtime; externals are resolved by the host module loader.
    Node,
    /// Browser runtime; no host module loader is assumed.
    Browser,
}

impl Platform {
    /// Returns the platform name as used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output module format. Determines the output file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleFormat {
    /// CommonJS output, `.cjs`
    CommonJs,
    /// ES module output, `.mjs`
    EsModule,
    /// Immediately-invoked script output, `.js`
    Iife,
}

impl ModuleFormat {
    /// Returns the file extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::CommonJs => "cjs",
            Self::EsModule => "mjs",
            Self::Iife => "js",
        }
    }
}
