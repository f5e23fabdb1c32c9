use crate::cli::{ExportArgs, Table};
use crate::config;
use crate::data::DataManager;
use crate::error::Result;
use crate::session;
use deskryptor::engine::store::DatasetStore;
use deskryptor::workflows::{catalog, export};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, warn};

pub async fn run(args: ExportArgs) -> Result<()> {
    let data_manager = DataManager::new()?;
    let app_config = config::build_config(&args.dataset, None, &data_manager)?;
    let session = session::open_session(&app_config).await?;

    let written = write_table(
        session.store(),
        args.table,
        app_config.core_config.highlight_threshold,
        &args.output,
    )?;

    if written == 0 {
        warn!("The {:?} table is empty; nothing was exported.", args.table);
        println!("Nothing to export: the table is empty.");
    } else {
        println!("✓ Exported {} row(s) to {}", written, args.output.display());
    }
    Ok(())
}

/// Writes `table` to `path` as CSV. The file is only created when there is something to
/// write.
pub fn write_table(
    store: &DatasetStore,
    table: Table,
    highlight_threshold: f64,
    path: &Path,
) -> Result<usize> {
    let rows = match table {
        Table::Donors => store.donors().len(),
        Table::Acceptors => store.acceptors().len(),
        Table::Complexes => store.complexes().len(),
    };
    if rows == 0 {
        return Ok(0);
    }

    info!("Exporting {:?} table to {:?}", table, path);
    let writer = BufWriter::new(File::create(path)?);
    let written = match table {
        Table::Donors => export::export_molecules(store.donors(), writer)?,
        Table::Acceptors => export::export_molecules(store.acceptors(), writer)?,
        Table::Complexes => {
            let rows = catalog::ranked_complexes(store, highlight_threshold);
            export::export_complexes(&rows, writer)?
        }
    };
    Ok(written)
}
