//! # Engine Module
//!
//! The stateful and derived logic of DESkryptor.
//!
//! ## Architecture
//!
//! - **Dataset Store** ([`store`]) - Loads the three collections all-or-nothing and serves
//!   read-only, keyed access to them
//! - **Selection** ([`selection`]) - The donor/acceptor pick state machine
//! - **Resolution** ([`resolver`]) - Pure derivation of ranked candidates or the complex
//!   record from a selection and a store
//! - **Configuration** ([`config`]) - Dataset layout and display thresholds
//! - **Error Handling** ([`error`]) - Load-path errors
//!
//! Only the store's load path can fail. Selection and resolution are total: every
//! selection resolves to a view, possibly an empty one.

pub mod config;
pub mod error;
pub mod resolver;
pub mod selection;
pub mod store;
