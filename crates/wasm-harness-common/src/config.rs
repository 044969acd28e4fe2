//! Backend vocabulary and engine configuration.
//!
//! This module defines the types a backend selection is expressed in:
//! - [`CompilerKind`]: which compiler translates Wasm to machine code
//! - [`EngineKind`]: which execution strategy runs the compiled code
//! - [`EngineConfig`]: pre-construction settings consumed once by engine
//!   construction

use std::fmt;

use serde::{Deserialize, Serialize};

/// A compiler backend translating WebAssembly to machine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerKind {
    /// Optimizing code generator with reasonable compile times.
    Cranelift,
    /// LLVM-based backend producing the fastest code, slowest to compile.
    Llvm,
    /// Baseline single-pass compiler with minimal compile latency.
    Singlepass,
}

/// An execution strategy for compiled WebAssembly code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Compile into the current process and run in-place.
    Jit,
    /// Compile to a native shared object and run through the platform loader.
    Native,
}

/// Selection identifiers for compilers.
///
/// Matching is case-sensitive. Adding a backend is a new row here, not a
/// new comparison chain in the resolver.
pub const COMPILER_TOKENS: &[(&str, CompilerKind)] = &[
    ("cranelift", CompilerKind::Cranelift),
    ("llvm", CompilerKind::Llvm),
    ("singlepass", CompilerKind::Singlepass),
];

/// Selection identifiers for engines.
pub const ENGINE_TOKENS: &[(&str, EngineKind)] = &[
    ("jit", EngineKind::Jit),
    ("native", EngineKind::Native),
];

impl CompilerKind {
    /// Look up a compiler by its selection identifier.
    ///
    /// Returns `None` for identifiers outside [`COMPILER_TOKENS`].
    pub fn from_token(token: &str) -> Option<Self> {
        COMPILER_TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, kind)| kind)
    }

    /// The selection identifier for this compiler.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cranelift => "cranelift",
            Self::Llvm => "llvm",
            Self::Singlepass => "singlepass",
        }
    }
}

impl EngineKind {
    /// Look up an engine by its selection identifier.
    ///
    /// Returns `None` for identifiers outside [`ENGINE_TOKENS`].
    pub fn from_token(token: &str) -> Option<Self> {
        ENGINE_TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, kind)| kind)
    }

    /// The selection identifier for this engine.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jit => "jit",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-construction engine settings.
///
/// An `EngineConfig` starts empty, receives at most one compiler and one
/// engine, and is consumed by value when the engine is built, so a config
/// cannot be reused after construction. A slot left unset defers the
/// choice to the build's default backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Compiler to build the engine with, if one was selected.
    #[serde(default)]
    pub compiler: Option<CompilerKind>,

    /// Execution engine to run on, if one was selected.
    #[serde(default)]
    pub engine: Option<EngineKind>,
}

impl EngineConfig {
    /// Create an empty configuration with no backend selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the compiler backend.
    pub fn set_compiler(&mut self, kind: CompilerKind) {
        self.compiler = Some(kind);
    }

    /// Select the execution engine.
    pub fn set_engine(&mut self, kind: EngineKind) {
        self.engine = Some(kind);
    }
}
