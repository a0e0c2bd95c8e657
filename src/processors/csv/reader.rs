use crate::processors::csv::CsvProcessorError::InvalidFormat;
use crate::processors::csv::{CsvProcessorError, CsvProcessorResult};
use crate::record::Record;
use csv::{Reader, StringRecord, Trim};
use std::io;

pub struct RecordIter<'r, R: 'r> {
    reader: &'r mut Reader<R>,
    record: StringRecord,
}

impl<'r, R: io::Read> RecordIter<'r, R> {
    fn new(reader: &'r mut CsvReader<R>) -> RecordIter<'r, R> {
        Self {
            reader: &mut reader.reader,
            record: StringRecord::new(),
        }
    }
}

impl<'r, R: io::Read> Iterator for RecordIter<'r, R> {
    type Item = CsvProcessorResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Err(err) => Some(Err(err.into())),
            Ok(false) => None,
            Ok(true) => Some(
                self.record
                    .deserialize::<Record>(None)
                    .map_err(CsvProcessorError::Csv),
            ),
        }
    }
}

/// A CSV reader bound to one delimiter.
///
/// The header row must split into at least two columns and every data row must have as many
/// fields as the header. Anything else means the delimiter doesn't match the input's layout.
pub struct CsvReader<R> {
    pub reader: Reader<R>,
    pub headers: StringRecord,
}

impl<R> CsvReader<R>
where
    R: io::Read,
{
    pub fn try_new(reader: R, delimiter: u8) -> CsvProcessorResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(false)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(InvalidFormat("missing header line".into()));
        }
        if headers.len() < 2 {
            return Err(InvalidFormat(format!(
                "header does not contain delimiter '{}'",
                delimiter.escape_ascii()
            )));
        }
        Ok(Self { reader: csv_reader, headers })
    }

    pub fn columns(&self) -> Vec<String> {
        self.headers.iter().map(String::from).collect()
    }

    pub fn iter(&mut self) -> RecordIter<R> {
        RecordIter::new(self)
    }
}
