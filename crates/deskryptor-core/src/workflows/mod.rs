//! # Workflows Module
//!
//! High-level entry points for a presentation layer.
//!
//! - **Screening** ([`screen`]) - An interactive session: load the dataset once, feed it
//!   donor/acceptor picks, render the recomputed view after every pick
//! - **Catalog** ([`catalog`]) - Database-viewer tables: collection counts and the
//!   EFI-ranked complex table with resolved names
//! - **Export** ([`export`]) - CSV export of any of the three tables

pub mod catalog;
pub mod export;
pub mod screen;
