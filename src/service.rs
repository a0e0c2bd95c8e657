use crate::datasource::DataSource;
use crate::processor::DataProcessor;
use crate::selector::{ProcessorSelector, SelectError};
use crate::storage::RecordStore;
use std::error::Error as StdError;
use thiserror::Error;
use tracing::error;

pub type IngestionResult<T, E> = Result<T, IngestionError<E>>;

#[derive(Error, Debug)]
pub enum IngestionError<E: StdError + 'static> {
    #[error("unable to persist records: {0}")]
    Storage(#[source] E),
}

/// What [`IngestionService::run`] did.
#[derive(Debug, PartialEq, Eq)]
pub enum IngestionOutcome {
    Persisted { table: String, rows: usize },

    /// No processor could read the data source; nothing was written.
    Skipped(SelectError),
}

/// Reads one data source and hands its records to a [`RecordStore`].
pub struct IngestionService<S> {
    datasource: DataSource,
    store: S,
    table: Option<String>,
    selector: ProcessorSelector,
}

impl<S> IngestionService<S>
where
    S: RecordStore,
{
    pub fn new(datasource: DataSource, store: S) -> Self {
        Self {
            datasource,
            store,
            table: None,
            selector: ProcessorSelector::new(),
        }
    }

    /// Overrides the table name, which defaults to the data source's file stem.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn table(&self) -> String {
        self.table.clone().unwrap_or_else(|| self.datasource.table_name())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn run(&mut self) -> IngestionResult<IngestionOutcome, S::Error> {
        let processor = match self.selector.select(&self.datasource) {
            Ok(processor) => processor,
            Err(err) => {
                error!(datasource = %self.datasource, error = %err, "no processor for data source");
                return Ok(IngestionOutcome::Skipped(err));
            }
        };

        let table = self.table();
        let rows = self
            .store
            .save(&table, processor.columns(), processor.records())
            .map_err(IngestionError::Storage)?;
        Ok(IngestionOutcome::Persisted { table, rows })
    }
}
