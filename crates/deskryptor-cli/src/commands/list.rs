use crate::cli::{ListArgs, Table};
use crate::config;
use crate::data::DataManager;
use crate::error::Result;
use crate::session;
use crate::utils::format;
use deskryptor::engine::store::DatasetStore;
use deskryptor::workflows::catalog::{self, CatalogSummary};
use tracing::info;

pub async fn run(args: ListArgs) -> Result<()> {
    let data_manager = DataManager::new()?;
    let app_config =
        config::build_config(&args.dataset, args.highlight_threshold, &data_manager)?;
    let session = session::open_session(&app_config).await?;

    info!("Listing {:?} table.", args.table);
    print!(
        "{}",
        render(
            session.store(),
            args.table,
            app_config.core_config.highlight_threshold
        )
    );
    Ok(())
}

pub fn render(store: &DatasetStore, table: Table, highlight_threshold: f64) -> String {
    let summary = CatalogSummary::of(store);
    match table {
        Table::Donors => format!(
            "Donors ({})\n{}",
            summary.donors,
            format::molecule_table(store.donors())
        ),
        Table::Acceptors => format!(
            "Acceptors ({})\n{}",
            summary.acceptors,
            format::molecule_table(store.acceptors())
        ),
        Table::Complexes => {
            let rows = catalog::ranked_complexes(store, highlight_threshold);
            format!(
                "Complexes ({}), * marks EFI above {:.2}\n{}",
                summary.complexes,
                highlight_threshold,
                format::complex_table(&rows)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskryptor::core::io::source::DatasetDocuments;

    fn store() -> DatasetStore {
        let mut store = DatasetStore::new();
        store
            .load(&DatasetDocuments {
                donors: r#"{"urea": {}, "lactic_acid": {"HOMO (eV)": -7.25}}"#.to_string(),
                acceptors: r#"{"betaine": {}}"#.to_string(),
                complexes: r#"{
                    "low": {"HBD": "urea", "HBA": "betaine", "EFI Score": 6.0, "Interaction Energy (kcal/mol)": -14.2},
                    "high": {"HBD": "lactic_acid", "HBA": "betaine", "EFI Score": 8.5, "Interaction Energy (kcal/mol)": -20.0}
                }"#
                .to_string(),
            })
            .unwrap();
        store
    }

    #[test]
    fn donor_table_has_count_header_and_one_line_per_donor() {
        let text = render(&store(), Table::Donors, 8.0);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Donors (2)");
        assert!(lines[1].starts_with("NAME"));
        assert!(lines[2].starts_with("urea"));
        assert!(lines[3].starts_with("lactic acid"));
        assert!(lines[3].contains("-7.250"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn complex_table_is_ranked_and_highlighted() {
        let text = render(&store(), Table::Complexes, 8.0);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Complexes (2), * marks EFI above 8.00");
        assert!(lines[2].starts_with("*    1 lactic acid"));
        assert!(lines[3].starts_with("     2 urea"));
    }
}
