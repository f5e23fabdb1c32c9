//! # Core Models Module
//!
//! Normalized representation of the screening dataset.
//!
//! ## Key Components
//!
//! - [`ids`] - Separate identifier namespaces for donors and acceptors
//! - [`descriptor`] - The fixed set of quantum-chemical descriptors and their values
//! - [`molecule`] - Donor and acceptor molecules
//! - [`complex`] - Precomputed donor–acceptor pairings
//!
//! ```ignore
//! use deskryptor::core::models::{ids::DonorId, molecule::Donor};
//!
//! let urea = Donor::from_key(DonorId::from("urea"), Default::default());
//! assert_eq!(urea.name, "urea");
//! ```

pub mod complex;
pub mod descriptor;
pub mod ids;
pub mod molecule;
