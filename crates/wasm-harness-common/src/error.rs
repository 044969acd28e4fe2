//! Error types for backend selection.
//!
//! This module defines [`HarnessError`], covering every failure the
//! selection pipeline can hit. All variants are terminal: the binary prints
//! the diagnostic and exits non-zero rather than falling back to another
//! backend, so a misconfigured test run never passes against the wrong one.

use thiserror::Error;

use crate::config::{CompilerKind, EngineKind};

/// Backend selection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The compiler identifier matched no known backend.
    #[error("Compiler '{name}' not recognized")]
    UnrecognizedCompiler {
        /// The identifier as it appeared in the selection token.
        name: String,
    },

    /// The engine identifier matched no known execution strategy.
    #[error("Engine '{name}' not recognized")]
    UnrecognizedEngine {
        /// The identifier as it appeared in the selection token.
        name: String,
    },

    /// A recognized compiler is not compiled into this build.
    ///
    /// This indicates a mismatch between the requested test matrix and the
    /// feature set the binary was built with.
    #[error("Compiler '{kind}' is not available in this build")]
    UnavailableCompiler {
        /// The compiler the selection asked for.
        kind: CompilerKind,
    },

    /// A recognized engine is not compiled into this build.
    #[error("Engine '{kind}' is not available in this build")]
    UnavailableEngine {
        /// The engine the selection asked for.
        kind: EngineKind,
    },

    /// No compiler backend exists in this build to default to.
    #[error("No compiler backend is compiled into this build")]
    NoCompilerAvailable,

    /// No execution engine exists in this build to default to.
    #[error("No execution engine is compiled into this build")]
    NoEngineAvailable,
}

impl HarnessError {
    /// Create a new `UnrecognizedCompiler` error.
    pub fn unrecognized_compiler(name: impl Into<String>) -> Self {
        Self::UnrecognizedCompiler { name: name.into() }
    }

    /// Create a new `UnrecognizedEngine` error.
    pub fn unrecognized_engine(name: impl Into<String>) -> Self {
        Self::UnrecognizedEngine { name: name.into() }
    }

    /// Returns `true` if this error names an identifier outside the known set.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedCompiler { .. } | Self::UnrecognizedEngine { .. }
        )
    }

    /// Returns `true` if this error reports a backend missing from the build.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UnavailableCompiler { .. } | Self::UnavailableEngine { .. }
        )
    }
}
