//! Build-time backend availability.
//!
//! Which compilers and engines exist in a binary is fixed by cargo features
//! at compile time. [`AvailabilityTable`] records that set so the resolver
//! can reject selections the running build cannot honor.

use wasm_harness_common::{CompilerKind, EngineKind};

/// The set of backends compiled into a binary.
///
/// The table is fixed once constructed; the resolver and the engine
/// constructor only read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityTable {
    compilers: Vec<CompilerKind>,
    engines: Vec<EngineKind>,
}

impl AvailabilityTable {
    /// Build the table from this crate's compiled-in feature set.
    pub fn from_build() -> Self {
        let mut compilers = Vec::new();
        if cfg!(feature = "cranelift") {
            compilers.push(CompilerKind::Cranelift);
        }
        if cfg!(feature = "llvm") {
            compilers.push(CompilerKind::Llvm);
        }
        if cfg!(feature = "singlepass") {
            compilers.push(CompilerKind::Singlepass);
        }

        let mut engines = Vec::new();
        if cfg!(feature = "jit") {
            engines.push(EngineKind::Jit);
        }
        if cfg!(feature = "native") {
            engines.push(EngineKind::Native);
        }

        Self { compilers, engines }
    }

    /// Build a table with an explicit backend set.
    ///
    /// Tests use this to exercise selections against builds other than the
    /// one they were compiled as.
    pub fn new(compilers: Vec<CompilerKind>, engines: Vec<EngineKind>) -> Self {
        Self { compilers, engines }
    }

    /// Check whether a compiler is compiled into this build.
    pub fn is_compiler_available(&self, kind: CompilerKind) -> bool {
        self.compilers.contains(&kind)
    }

    /// Check whether an engine is compiled into this build.
    pub fn is_engine_available(&self, kind: EngineKind) -> bool {
        self.engines.contains(&kind)
    }

    /// Compilers present in this build, in declaration order.
    pub fn compilers(&self) -> &[CompilerKind] {
        &self.compilers
    }

    /// Engines present in this build, in declaration order.
    pub fn engines(&self) -> &[EngineKind] {
        &self.engines
    }

    /// The compiler an unset configuration slot falls back to.
    pub fn default_compiler(&self) -> Option<CompilerKind> {
        self.compilers.first().copied()
    }

    /// The engine an unset configuration slot falls back to.
    pub fn default_engine(&self) -> Option<EngineKind> {
        self.engines.first().copied()
    }
}

impl Default for AvailabilityTable {
    fn default() -> Self {
        Self::from_build()
    }
}
