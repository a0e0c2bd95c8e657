use crate::datasource::DataSource;
use crate::processor::DataProcessor;
use crate::processors::csv::reader::CsvReader;
use crate::processors::csv::{CsvProcessorError, CsvProcessorResult};
use crate::record::Record;
use std::fs::File;
use tracing::debug;

/// Delimiter a [`CsvProcessor`] starts out with.
pub const DEFAULT_DELIMITER: u8 = b';';

#[derive(Debug)]
pub struct CsvProcessor {
    datasource: DataSource,
    delimiter: u8,
    columns: Vec<String>,
    records: Vec<Record>,
}

impl CsvProcessor {
    pub fn new(datasource: DataSource) -> Self {
        Self {
            datasource,
            delimiter: DEFAULT_DELIMITER,
            columns: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Changes the delimiter used by the next read. Previously read records are discarded.
    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
        self.clear();
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
        (self.columns, self.records)
    }

    fn clear(&mut self) {
        self.columns.clear();
        self.records.clear();
    }

    fn parse(&self) -> CsvProcessorResult<(Vec<String>, Vec<Record>)> {
        let file = File::open(self.datasource.path())?;
        let mut reader = CsvReader::try_new(file, self.delimiter)?;
        let records = reader.iter().collect::<CsvProcessorResult<Vec<Record>>>()?;
        Ok((reader.columns(), records))
    }
}

impl DataProcessor for CsvProcessor {
    type Error = CsvProcessorError;

    fn datasource(&self) -> &DataSource {
        &self.datasource
    }

    fn try_read(&mut self) -> CsvProcessorResult<()> {
        self.clear();
        let (columns, records) = self.parse()?;
        debug!(
            datasource = %self.datasource,
            delimiter = %self.delimiter.escape_ascii(),
            rows = records.len(),
            "read csv data source",
        );
        self.columns = columns;
        self.records = records;
        Ok(())
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}
