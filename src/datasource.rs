use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File formats a [`DataSource`] can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Txt,
}

impl Format {
    /// Maps a file extension (case-insensitive) onto a supported format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Txt => write!(f, "txt"),
        }
    }
}

/// A file to ingest records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    path: PathBuf,
    format: Option<Format>,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The format inferred from the path's suffix, if it is a supported one.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Table name used when persisting this source's records: the file stem.
    pub fn table_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records".into())
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
