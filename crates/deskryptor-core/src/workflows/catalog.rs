use crate::core::models::complex::Complex;
use crate::engine::store::DatasetStore;

/// Collection sizes, as shown on the database-viewer tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub donors: usize,
    pub acceptors: usize,
    pub complexes: usize,
}

impl CatalogSummary {
    pub fn of(store: &DatasetStore) -> Self {
        Self {
            donors: store.donors().len(),
            acceptors: store.acceptors().len(),
            complexes: store.complexes().len(),
        }
    }
}

/// One line of the complex table, with donor and acceptor names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexRow<'a> {
    pub complex: &'a Complex,
    pub donor_name: &'a str,    // Falls back to the raw donor id when the donor is unknown
    pub acceptor_name: &'a str, // Falls back to the raw acceptor id when the acceptor is unknown
    pub highlighted: bool,
}

/// Every complex in the store, best EFI score first.
///
/// Equal scores keep their loaded order. A complex is `highlighted` when its EFI score is
/// strictly above `highlight_threshold`.
pub fn ranked_complexes(store: &DatasetStore, highlight_threshold: f64) -> Vec<ComplexRow<'_>> {
    let mut rows: Vec<ComplexRow<'_>> = store
        .complexes()
        .iter()
        .map(|complex| ComplexRow {
            complex,
            donor_name: store
                .donor(&complex.donor_id)
                .map_or(complex.donor_id.as_str(), |d| d.name.as_str()),
            acceptor_name: store
                .acceptor(&complex.acceptor_id)
                .map_or(complex.acceptor_id.as_str(), |a| a.name.as_str()),
            highlighted: complex.efi_score > highlight_threshold,
        })
        .collect();

    rows.sort_by(|a, b| b.complex.efi_score.total_cmp(&a.complex.efi_score));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::source::DatasetDocuments;

    fn store() -> DatasetStore {
        let mut store = DatasetStore::new();
        store
            .load(&DatasetDocuments {
                donors: r#"{"urea": {}, "lactic_acid": {}}"#.to_string(),
                acceptors: r#"{"choline_chloride": {}}"#.to_string(),
                complexes: r#"{
                    "a": {"HBD": "urea", "HBA": "choline_chloride", "EFI Score": 7.5, "Interaction Energy (kcal/mol)": -1.0},
                    "b": {"HBD": "lactic_acid", "HBA": "choline_chloride", "EFI Score": 8.0, "Interaction Energy (kcal/mol)": -2.0},
                    "c": {"HBD": "phenol", "HBA": "choline_chloride", "EFI Score": 9.1, "Interaction Energy (kcal/mol)": -3.0},
                    "d": {"HBD": "urea", "HBA": "zinc_chloride", "EFI Score": 7.5, "Interaction Energy (kcal/mol)": -4.0}
                }"#
                .to_string(),
            })
            .unwrap();
        store
    }

    #[test]
    fn summary_counts_each_collection() {
        assert_eq!(
            CatalogSummary::of(&store()),
            CatalogSummary {
                donors: 2,
                acceptors: 1,
                complexes: 4
            }
        );
        assert_eq!(
            CatalogSummary::of(&DatasetStore::new()),
            CatalogSummary {
                donors: 0,
                acceptors: 0,
                complexes: 0
            }
        );
    }

    #[test]
    fn rows_are_ranked_and_names_fall_back_to_ids() {
        let store = store();
        let rows = ranked_complexes(&store, 8.0);

        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.donor_name, r.acceptor_name, r.highlighted))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("phenol", "choline chloride", true),
                ("lactic acid", "choline chloride", false),
                ("urea", "choline chloride", false),
                ("urea", "zinc_chloride", false),
            ]
        );
    }
}
