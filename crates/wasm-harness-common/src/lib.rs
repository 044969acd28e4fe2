//! Common types and errors for wasm-harness.
//!
//! This crate provides shared functionality used across the wasm-harness workspace:
//! - Backend vocabulary ([`CompilerKind`], [`EngineKind`]) with the identifier
//!   tables that map selection tokens to variants
//! - [`EngineConfig`], the pre-construction settings object consumed by
//!   engine construction
//! - Error types using `thiserror` for type-safe error handling

pub mod config;
pub mod error;

pub use config::{COMPILER_TOKENS, CompilerKind, ENGINE_TOKENS, EngineConfig, EngineKind};
pub use error::HarnessError;
