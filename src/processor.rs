use crate::datasource::{DataSource, Format};
use crate::processors::csv::CsvProcessor;
use crate::processors::txt::TxtProcessor;
use crate::processors::{ProcessorError, ProcessorResult};
use crate::record::Record;
use std::error::Error;
use tracing::warn;

/// Reads a [`DataSource`] into an in-memory record buffer.
pub trait DataProcessor {
    type Error: Error;

    fn datasource(&self) -> &DataSource;

    /// Parses the whole data source under the current configuration.
    ///
    /// On failure the record buffer and columns are left empty.
    fn try_read(&mut self) -> Result<(), Self::Error>;

    fn columns(&self) -> &[String];

    fn records(&self) -> &[Record];

    /// Like [`try_read`](Self::try_read), but collapses the failure cause into `false` after
    /// logging it.
    fn read(&mut self) -> bool {
        match self.try_read() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    datasource = %self.datasource(),
                    error = %err,
                    "unable to read data source",
                );
                false
            }
        }
    }
}

/// A processor that has successfully read its data source.
#[derive(Debug)]
pub enum Processor {
    Csv(CsvProcessor),
    Txt(TxtProcessor),
}

impl Processor {
    pub fn format(&self) -> Format {
        match self {
            Processor::Csv(_) => Format::Csv,
            Processor::Txt(_) => Format::Txt,
        }
    }

    /// Consumes the processor, returning its columns and records.
    pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
        match self {
            Processor::Csv(processor) => processor.into_parts(),
            Processor::Txt(processor) => processor.into_parts(),
        }
    }
}

impl DataProcessor for Processor {
    type Error = ProcessorError;

    fn datasource(&self) -> &DataSource {
        match self {
            Processor::Csv(processor) => processor.datasource(),
            Processor::Txt(processor) => processor.datasource(),
        }
    }

    fn try_read(&mut self) -> ProcessorResult<()> {
        match self {
            Processor::Csv(processor) => Ok(processor.try_read()?),
            Processor::Txt(processor) => Ok(processor.try_read()?),
        }
    }

    fn columns(&self) -> &[String] {
        match self {
            Processor::Csv(processor) => processor.columns(),
            Processor::Txt(processor) => processor.columns(),
        }
    }

    fn records(&self) -> &[Record] {
        match self {
            Processor::Csv(processor) => processor.records(),
            Processor::Txt(processor) => processor.records(),
        }
    }
}
