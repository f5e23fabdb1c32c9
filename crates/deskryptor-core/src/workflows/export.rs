use super::catalog::ComplexRow;
use crate::core::models::descriptor::{Descriptor, DescriptorSet};
use crate::core::models::molecule::Molecule;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct MoleculeRecord<'a> {
    id: &'a str,
    name: &'a str,
    formula: &'a str,
    molecular_weight: Option<f64>,
    homo: Option<f64>,
    lumo: Option<f64>,
    gap: Option<f64>,
    energy: Option<f64>,
    dipole: Option<f64>,
    volume: Option<f64>,
}

impl<'a, K: AsRef<str>> From<&'a Molecule<K>> for MoleculeRecord<'a> {
    fn from(m: &'a Molecule<K>) -> Self {
        let d = &m.descriptors;
        Self {
            id: m.id.as_ref(),
            name: &m.name,
            formula: &m.formula,
            molecular_weight: m.molecular_weight,
            homo: d.get(Descriptor::Homo),
            lumo: d.get(Descriptor::Lumo),
            gap: d.get(Descriptor::Gap),
            energy: d.get(Descriptor::Energy),
            dipole: d.get(Descriptor::Dipole),
            volume: d.get(Descriptor::Volume),
        }
    }
}

#[derive(Serialize)]
struct ComplexRecord<'a> {
    donor_id: &'a str,
    acceptor_id: &'a str,
    donor_name: &'a str,
    acceptor_name: &'a str,
    ratio: &'a str,
    efi_score: f64,
    interaction_energy: f64,
    homo: Option<f64>,
    lumo: Option<f64>,
    gap: Option<f64>,
    energy: Option<f64>,
    dipole: Option<f64>,
}

impl<'a> From<&ComplexRow<'a>> for ComplexRecord<'a> {
    fn from(row: &ComplexRow<'a>) -> Self {
        let c = row.complex;
        let d: &DescriptorSet = &c.descriptors;
        Self {
            donor_id: c.donor_id.as_str(),
            acceptor_id: c.acceptor_id.as_str(),
            donor_name: row.donor_name,
            acceptor_name: row.acceptor_name,
            ratio: &c.ratio,
            efi_score: c.efi_score,
            interaction_energy: c.interaction_energy,
            homo: d.get(Descriptor::Homo),
            lumo: d.get(Descriptor::Lumo),
            gap: d.get(Descriptor::Gap),
            energy: d.get(Descriptor::Energy),
            dipole: d.get(Descriptor::Dipole),
        }
    }
}

/// Writes a donor or acceptor table as CSV and returns the number of rows written.
///
/// An empty table produces no output at all, not even a header line.
pub fn export_molecules<K, W>(molecules: &[Molecule<K>], writer: W) -> Result<usize, ExportError>
where
    K: AsRef<str>,
    W: Write,
{
    write_records(molecules.iter().map(MoleculeRecord::from), writer)
}

/// Writes the complex table as CSV, in the order of `rows`, and returns the number of
/// rows written. An empty table produces no output.
pub fn export_complexes<W: Write>(rows: &[ComplexRow<'_>], writer: W) -> Result<usize, ExportError> {
    write_records(rows.iter().map(ComplexRecord::from), writer)
}

fn write_records<T, W>(records: impl ExactSizeIterator<Item = T>, writer: W) -> Result<usize, ExportError>
where
    T: Serialize,
    W: Write,
{
    let count = records.len();
    if count == 0 {
        debug!("Nothing to export; skipping empty table.");
        return Ok(0);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    debug!("Exported {} row(s).", count);
    Ok(count)
}
