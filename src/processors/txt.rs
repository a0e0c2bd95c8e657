use crate::datasource::DataSource;
use crate::processor::DataProcessor;
use crate::record::Record;
use std::{fs, io};
use thiserror::Error;
use tracing::debug;

/// Name of the single column a text data source is read into.
pub const LINE_COLUMN: &str = "line";

pub type TxtProcessorResult<T> = Result<T, TxtProcessorError>;

#[derive(Error, Debug)]
pub enum TxtProcessorError {
    #[error("error processing text: {0}")]
    Io(#[from] io::Error),
}

/// Reads a text file into one single-field record per line.
#[derive(Debug)]
pub struct TxtProcessor {
    datasource: DataSource,
    columns: Vec<String>,
    records: Vec<Record>,
}

impl TxtProcessor {
    pub fn new(datasource: DataSource) -> Self {
        Self {
            datasource,
            columns: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
        (self.columns, self.records)
    }
}

impl DataProcessor for TxtProcessor {
    type Error = TxtProcessorError;

    fn datasource(&self) -> &DataSource {
        &self.datasource
    }

    fn try_read(&mut self) -> TxtProcessorResult<()> {
        self.columns.clear();
        self.records.clear();

        // Invalid UTF-8 surfaces as `io::ErrorKind::InvalidData`.
        let content = fs::read_to_string(self.datasource.path())?;
        self.records = content
            .lines()
            .map(|line| Record::new(vec![line.to_string()]))
            .collect();
        self.columns = vec![LINE_COLUMN.to_string()];
        debug!(datasource = %self.datasource, rows = self.records.len(), "read text data source");
        Ok(())
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}
