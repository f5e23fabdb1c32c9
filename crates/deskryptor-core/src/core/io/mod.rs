//! Dataset input for DESkryptor.
//!
//! The dataset arrives as three JSON documents (donors, acceptors, complexes). This module
//! abstracts where those documents come from ([`source`]) and translates their raw,
//! loosely typed shape into the normalized models ([`json`]).

pub mod json;
pub mod source;
