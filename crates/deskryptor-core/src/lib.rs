//! # DESkryptor Core Library
//!
//! Screening primitives for deep eutectic solvents (DES): a read-only dataset of hydrogen
//! bond donors (HBD), hydrogen bond acceptors (HBA) and precomputed donor–acceptor complexes,
//! together with the logic that ranks compatible partners by EFI score and resolves the
//! complex record of a fully specified pair.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `Complex`,
//!   `DescriptorSet`) and the I/O that turns raw JSON documents into them.
//!
//! - **[`engine`]: The Logic Core.** The `DatasetStore` with its explicit loaded/unloaded
//!   state, the `Selection` state machine, and the pure `resolver` that derives the ranked
//!   candidate list or the complex lookup from a selection.
//!
//! - **[`workflows`]: The Public API.** High-level entry points for a presentation layer:
//!   an interactive screening session, database-viewer tables, and CSV export.

pub mod core;
pub mod engine;
pub mod workflows;
