use crate::processors::csv::CsvProcessorError;
use crate::processors::txt::TxtProcessorError;
use thiserror::Error;

pub mod csv;
pub mod txt;

pub type ProcessorResult<T> = Result<T, ProcessorError>;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Csv(#[from] CsvProcessorError),

    #[error(transparent)]
    Txt(#[from] TxtProcessorError),
}
