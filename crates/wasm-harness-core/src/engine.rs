//! Engine construction from a validated configuration.
//!
//! This is the hand-off point between selection and the runtime proper:
//! [`EngineHandle::build`] consumes an [`EngineConfig`] exactly once and
//! fills unset slots with the build's default backend. Compilation and
//! execution machinery live behind the handle in the backend crates.

use std::fmt;

use tracing::info;

use wasm_harness_common::{CompilerKind, EngineConfig, EngineKind, HarnessError};

use crate::availability::AvailabilityTable;

/// A constructed engine, pinned to one compiler/engine pair.
///
/// Beyond the resolved pair the handle is opaque to callers. It is cheap to
/// clone and carries no per-run state.
#[derive(Clone)]
pub struct EngineHandle {
    compiler: CompilerKind,
    engine: EngineKind,
}

impl EngineHandle {
    /// Build an engine from a configuration.
    ///
    /// Taking the config by value makes it single-use: a consumed config
    /// cannot reach a second construction call. A slot the configuration
    /// leaves unset falls back to the first backend compiled into this
    /// build.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NoCompilerAvailable`] or
    /// [`HarnessError::NoEngineAvailable`] when a slot is unset and the
    /// build has nothing to default to.
    pub fn build(config: EngineConfig, table: &AvailabilityTable) -> Result<Self, HarnessError> {
        let compiler = match config.compiler {
            Some(kind) => kind,
            None => table
                .default_compiler()
                .ok_or(HarnessError::NoCompilerAvailable)?,
        };
        let engine = match config.engine {
            Some(kind) => kind,
            None => table
                .default_engine()
                .ok_or(HarnessError::NoEngineAvailable)?,
        };

        info!(compiler = %compiler, engine = %engine, "Engine constructed");

        Ok(Self { compiler, engine })
    }

    /// The compiler backend this engine was built with.
    pub fn compiler(&self) -> CompilerKind {
        self.compiler
    }

    /// The execution engine this engine runs on.
    pub fn engine(&self) -> EngineKind {
        self.engine
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("compiler", &self.compiler)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
