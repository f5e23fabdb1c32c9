//! Normalization of the raw JSON dataset documents.
//!
//! Each document is a JSON object keyed by an opaque string. Molecule documents map a
//! molecule key to its descriptor fields (`"HOMO (eV)"`, `"Dipole Moment (D)"`, ...);
//! the complex document maps a complex name to its `HBD`/`HBA` references, scores and
//! descriptor fields. Key order is preserved, and it defines the loaded order of each
//! collection.

use crate::core::models::complex::{Complex, DEFAULT_RATIO};
use crate::core::models::descriptor::{Descriptor, DescriptorSet};
use crate::core::models::ids::{AcceptorId, DonorId};
use crate::core::models::molecule::{Acceptor, Donor, Molecule};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

type RawFields = IndexMap<String, Value>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid record '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawComplexRecord {
    #[serde(rename = "HBD")]
    hbd: String,
    #[serde(rename = "HBA")]
    hba: String,
    #[serde(rename = "EFI Score")]
    efi_score: f64,
    #[serde(rename = "Interaction Energy (kcal/mol)")]
    interaction_energy: f64,
    #[serde(rename = "Ratio", default)]
    ratio: Option<String>,
    #[serde(flatten)]
    fields: RawFields,
}

pub fn parse_donors(text: &str) -> Result<Vec<Donor>, DocumentError> {
    parse_molecules::<DonorId>(text)
}

pub fn parse_acceptors(text: &str) -> Result<Vec<Acceptor>, DocumentError> {
    parse_molecules::<AcceptorId>(text)
}

pub fn parse_complexes(text: &str) -> Result<Vec<Complex>, DocumentError> {
    let raw: IndexMap<String, RawComplexRecord> = serde_json::from_str(text)?;

    raw.into_iter()
        .map(|(key, record)| {
            let invalid = |reason: String| DocumentError::InvalidRecord {
                key: key.clone(),
                reason,
            };
            require_finite("EFI Score", record.efi_score).map_err(invalid)?;
            require_finite("Interaction Energy (kcal/mol)", record.interaction_energy)
                .map_err(invalid)?;
            let descriptors = descriptors_from_fields(&record.fields).map_err(invalid)?;

            Ok(Complex {
                donor_id: DonorId::from(record.hbd),
                acceptor_id: AcceptorId::from(record.hba),
                ratio: record
                    .ratio
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_RATIO.to_string()),
                efi_score: record.efi_score,
                interaction_energy: record.interaction_energy,
                descriptors,
            })
        })
        .collect()
}

fn parse_molecules<K>(text: &str) -> Result<Vec<Molecule<K>>, DocumentError>
where
    K: From<String> + AsRef<str>,
{
    let raw: IndexMap<String, RawFields> = serde_json::from_str(text)?;

    raw.into_iter()
        .map(|(key, fields)| {
            if key.is_empty() {
                return Err(DocumentError::InvalidRecord {
                    key,
                    reason: "molecule key must not be empty".to_string(),
                });
            }
            let descriptors =
                descriptors_from_fields(&fields).map_err(|reason| DocumentError::InvalidRecord {
                    key: key.clone(),
                    reason,
                })?;
            Ok(Molecule::from_key(K::from(key), descriptors))
        })
        .collect()
}

fn descriptors_from_fields(fields: &RawFields) -> Result<DescriptorSet, String> {
    let mut set = DescriptorSet::new();
    for (field, value) in fields {
        let Some(descriptor) = Descriptor::from_source_field(field) else {
            trace!("Ignoring unrecognized field '{}'", field);
            continue;
        };
        let parsed = match value {
            Value::Null => None,
            Value::Number(n) => {
                let v = n
                    .as_f64()
                    .ok_or_else(|| format!("field '{}' is not representable as f64", field))?;
                require_finite(field, v)?;
                Some(v)
            }
            other => {
                return Err(format!(
                    "field '{}' must be a number or null, found {}",
                    field, other
                ));
            }
        };
        set.set(descriptor, parsed);
    }
    Ok(set)
}

fn require_finite(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("field '{}' is not a finite number", field))
    }
}
