//! Integration tests for wasm-harness-core.
//!
//! These tests verify the complete selection pipeline:
//! - Token parsing
//! - Validation against the availability table
//! - Engine construction with default filling

use wasm_harness_common::{COMPILER_TOKENS, CompilerKind, ENGINE_TOKENS, EngineKind};
use wasm_harness_core::{AvailabilityTable, BackendResolver, EngineHandle};

fn full_table() -> AvailabilityTable {
    AvailabilityTable::new(
        vec![
            CompilerKind::Cranelift,
            CompilerKind::Llvm,
            CompilerKind::Singlepass,
        ],
        vec![EngineKind::Jit, EngineKind::Native],
    )
}

// ============================================================================
// Test: Token to Engine
// ============================================================================

#[test]
fn test_token_to_engine() {
    let table = full_table();
    let resolver = BackendResolver::new(&table);

    let config = resolver.resolve(Some("singlepass-native")).unwrap();
    let handle = EngineHandle::build(config, &table).unwrap();

    assert_eq!(handle.compiler(), CompilerKind::Singlepass);
    assert_eq!(handle.engine(), EngineKind::Native);
}

// ============================================================================
// Test: Full Selection Matrix
// ============================================================================

#[test]
fn test_every_pair_builds() {
    let table = full_table();
    let resolver = BackendResolver::new(&table);

    for (compiler_name, compiler_kind) in COMPILER_TOKENS {
        for (engine_name, engine_kind) in ENGINE_TOKENS {
            let token = format!("{compiler_name}-{engine_name}");

            let config = resolver.resolve(Some(&token)).unwrap();
            let handle = EngineHandle::build(config, &table).unwrap();

            assert_eq!(handle.compiler(), *compiler_kind, "token: {token}");
            assert_eq!(handle.engine(), *engine_kind, "token: {token}");
        }
    }
}

// ============================================================================
// Test: Defaults From This Build
// ============================================================================

#[cfg(all(feature = "cranelift", feature = "jit"))]
#[test]
fn test_absent_token_uses_build_defaults() {
    let table = AvailabilityTable::from_build();
    let resolver = BackendResolver::new(&table);

    let config = resolver.resolve(None).unwrap();
    let handle = EngineHandle::build(config, &table).unwrap();

    assert_eq!(handle.compiler(), CompilerKind::Cranelift);
    assert_eq!(handle.engine(), EngineKind::Jit);
}

#[cfg(all(feature = "cranelift", feature = "jit"))]
#[test]
fn test_partial_token_fills_missing_slot() {
    let table = AvailabilityTable::from_build();
    let resolver = BackendResolver::new(&table);

    let config = resolver.resolve(Some("-jit")).unwrap();
    let handle = EngineHandle::build(config, &table).unwrap();

    assert_eq!(handle.compiler(), CompilerKind::Cranelift);
    assert_eq!(handle.engine(), EngineKind::Jit);
}

// ============================================================================
// Test: Failures Never Produce an Engine
// ============================================================================

#[test]
fn test_unrecognized_compiler_stops_the_pipeline() {
    let table = full_table();
    let resolver = BackendResolver::new(&table);

    let err = resolver.resolve(Some("turbofan-jit")).unwrap_err();

    assert!(err.is_unrecognized());
    assert!(err.to_string().contains("turbofan"));
}

#[test]
fn test_unavailable_backend_stops_the_pipeline() {
    let table = AvailabilityTable::new(vec![CompilerKind::Cranelift], vec![EngineKind::Jit]);
    let resolver = BackendResolver::new(&table);

    let err = resolver.resolve(Some("singlepass-jit")).unwrap_err();

    assert!(err.is_unavailable());
}

// ============================================================================
// Test: Determinism
// ============================================================================

#[test]
fn test_independent_resolutions_agree() {
    let table = full_table();
    let resolver = BackendResolver::new(&table);

    let first = resolver.resolve(Some("llvm-native")).unwrap();
    let second = resolver.resolve(Some("llvm-native")).unwrap();

    assert_eq!(first, second);

    let first = EngineHandle::build(first, &table).unwrap();
    let second = EngineHandle::build(second, &table).unwrap();

    assert_eq!(first.compiler(), second.compiler());
    assert_eq!(first.engine(), second.engine());
}
