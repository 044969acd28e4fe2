//! Backend selection from an encoded configuration token.
//!
//! The resolver turns a `<compiler>-<engine>` token into a validated
//! [`EngineConfig`]. Every failure is terminal for the caller: in the test
//! matrices this runs under, a misconfigured selection must fail the run
//! rather than fall back to a default backend.

use tracing::info;

use wasm_harness_common::{CompilerKind, EngineConfig, EngineKind, HarnessError};

use crate::availability::AvailabilityTable;

/// Resolves selection tokens against the backends in the current build.
///
/// Resolution is a linear pass: report the parsed identifiers, match the
/// compiler segment, match the engine segment. A compiler error is returned
/// before the engine segment is examined.
pub struct BackendResolver<'a> {
    table: &'a AvailabilityTable,
}

impl<'a> BackendResolver<'a> {
    /// Create a resolver over the given availability table.
    pub fn new(table: &'a AvailabilityTable) -> Self {
        Self { table }
    }

    /// Resolve a selection token into an engine configuration.
    ///
    /// The token has the form `<compiler>-<engine>`, split at the first `-`.
    /// An absent token, or an empty segment on either side of the separator,
    /// leaves that slot unset and defers the choice to engine construction.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnrecognizedCompiler`] or
    /// [`HarnessError::UnrecognizedEngine`] for a non-empty identifier
    /// outside the known set, and [`HarnessError::UnavailableCompiler`] or
    /// [`HarnessError::UnavailableEngine`] when the selection names a
    /// backend this build was compiled without.
    pub fn resolve(&self, token: Option<&str>) -> Result<EngineConfig, HarnessError> {
        let mut config = EngineConfig::new();

        let Some(token) = token else {
            info!("No selection token; deferring backend choice to build defaults");
            return Ok(config);
        };

        let (compiler_id, engine_id) = split_token(token);
        info!(
            compiler = compiler_id,
            engine = engine_id,
            "Parsed backend selection"
        );

        if !compiler_id.is_empty() {
            let kind = CompilerKind::from_token(compiler_id)
                .ok_or_else(|| HarnessError::unrecognized_compiler(compiler_id))?;
            if !self.table.is_compiler_available(kind) {
                return Err(HarnessError::UnavailableCompiler { kind });
            }
            config.set_compiler(kind);
        }

        if !engine_id.is_empty() {
            let kind = EngineKind::from_token(engine_id)
                .ok_or_else(|| HarnessError::unrecognized_engine(engine_id))?;
            if !self.table.is_engine_available(kind) {
                return Err(HarnessError::UnavailableEngine { kind });
            }
            config.set_engine(kind);
        }

        Ok(config)
    }
}

/// Split a selection token at its first `-`.
///
/// A token without a separator yields an empty engine segment, which the
/// resolver treats the same as an absent one.
fn split_token(token: &str) -> (&str, &str) {
    token.split_once('-').unwrap_or((token, ""))
}
