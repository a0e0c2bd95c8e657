//! Picks the processor for a [`DataSource`] and makes sure it can actually read it.
//!
//! CSV sources are read with [`DEFAULT_DELIMITER`] first and, if that layout doesn't fit, once
//! more with [`FALLBACK_DELIMITER`]. No other delimiters are tried. Text sources get a single
//! read attempt.
use crate::datasource::{DataSource, Format};
use crate::processor::{DataProcessor, Processor};
use crate::processors::csv::{CsvProcessor, DEFAULT_DELIMITER};
use crate::processors::txt::TxtProcessor;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Delimiter a CSV source is re-read with after [`DEFAULT_DELIMITER`] failed.
pub const FALLBACK_DELIMITER: u8 = b',';

pub type SelectResult<T> = Result<T, SelectError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("unsupported format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("unreadable data source: {}", .0.display())]
    UnreadableSource(PathBuf),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessorSelector;

impl ProcessorSelector {
    pub fn new() -> Self {
        Self
    }

    /// Returns a processor that has read `datasource`, or why none could.
    pub fn select(&self, datasource: &DataSource) -> SelectResult<Processor> {
        match datasource.format() {
            None => Err(SelectError::UnsupportedFormat(datasource.path().to_path_buf())),
            Some(Format::Csv) => self.select_csv(datasource).map(Processor::Csv),
            Some(Format::Txt) => self.select_txt(datasource).map(Processor::Txt),
        }
    }

    fn select_csv(&self, datasource: &DataSource) -> SelectResult<CsvProcessor> {
        let mut processor = CsvProcessor::new(datasource.clone());
        if processor.read() {
            return Ok(processor);
        }

        debug!(
            datasource = %datasource,
            delimiter = %FALLBACK_DELIMITER.escape_ascii(),
            "retrying csv data source with fallback delimiter",
        );
        processor.set_delimiter(FALLBACK_DELIMITER);
        if processor.read() {
            info!(datasource = %datasource, "csv data source read with fallback delimiter");
            return Ok(processor);
        }
        Err(SelectError::UnreadableSource(datasource.path().to_path_buf()))
    }

    fn select_txt(&self, datasource: &DataSource) -> SelectResult<TxtProcessor> {
        let mut processor = TxtProcessor::new(datasource.clone());
        if processor.read() {
            return Ok(processor);
        }
        Err(SelectError::UnreadableSource(datasource.path().to_path_buf()))
    }
}
