//! Backend resolution core for wasm-harness.
//!
//! This crate turns an encoded selection token into a constructed engine:
//! - [`AvailabilityTable`]: which backends this binary was built with
//! - [`BackendResolver`]: token parsing and validation
//! - [`EngineHandle`]: the constructed engine, pinned to one backend pair
//!
//! # Architecture
//!
//! ```text
//! "<compiler>-<engine>"
//!          │
//!          ▼
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │   BackendResolver    │─────▶│     EngineConfig     │
//! │  (parse + validate)  │      │  (consumed once)     │
//! └──────────────────────┘      └──────────────────────┘
//!          │                               │
//!          │ reads                         ▼
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │  AvailabilityTable   │─────▶│  EngineHandle::build │
//! │ (fixed at compile    │ fills│  (defaults unset     │
//! │  time by features)   │ slots│   slots)             │
//! └──────────────────────┘      └──────────────────────┘
//! ```

pub mod availability;
pub mod engine;
pub mod resolver;

pub use availability::AvailabilityTable;
pub use engine::EngineHandle;
pub use resolver::BackendResolver;
