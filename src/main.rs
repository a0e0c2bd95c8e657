use anyhow::{bail, Context};
use clap::{Parser, ValueHint};
use record_ingest::datasource::DataSource;
use record_ingest::service::{IngestionOutcome, IngestionService};
use record_ingest::storage::SqliteStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the data source to ingest.
    ///
    /// Supported file formats: CSV (`;` or `,` separated, with header), TXT (one record per line)
    #[arg(value_hint = ValueHint::FilePath, default_value = "productsData.txt")]
    path: PathBuf,

    /// Database to write to: a `sqlite://` URL, a file path or `:memory:`.
    #[arg(short, long, default_value = "sqlite:///test.db")]
    database: String,

    /// Table to write the records to. Defaults to the data source's file name without extension.
    #[arg(short, long)]
    table: Option<String>,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = SqliteStore::open(&cli.database).context("unable to open database")?;

    let mut service = IngestionService::new(DataSource::new(&cli.path), store);
    if let Some(table) = cli.table {
        service = service.with_table(table);
    }

    match service.run().context("ingesting data source failed")? {
        IngestionOutcome::Persisted { table, rows } => {
            println!("{rows} records written to table '{table}'");
            Ok(())
        }
        IngestionOutcome::Skipped(err) => bail!(err),
    }
}
