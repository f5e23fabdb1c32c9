//! # Core Module
//!
//! Stateless building blocks of DESkryptor: the normalized data model for donors,
//! acceptors and complexes, and the I/O that produces it from raw documents.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Typed identifiers, descriptor sets, molecules and complexes
//! - **Dataset I/O** ([`io`]) - Raw document sources and JSON normalization
//!
//! Nothing in this module holds state between calls; the loaded dataset lives in
//! [`crate::engine::store`].

pub mod io;
pub mod models;
