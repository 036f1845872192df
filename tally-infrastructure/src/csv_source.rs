use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tally_application::{ExpenseSource, SourceError};
use tally_domain::{RawRow, RowError};

/// Reads a semicolon-delimited expense file with header
/// `date;creditor;subject;amount;participants`. A record that does not
/// decode becomes a recoverable `RowError::Malformed`; an unreadable file is
/// fatal.
pub struct CsvExpenseSource {
    path: PathBuf,
}

impl CsvExpenseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(reader: impl Read) -> Result<Vec<Result<RawRow, RowError>>, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<RawRow>() {
            match record {
                Ok(row) => rows.push(Ok(row)),
                Err(err) => {
                    // An I/O failure mid-read means the source itself broke,
                    // not one row.
                    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
                        return Err(SourceError::Read {
                            detail: err.to_string(),
                        });
                    }
                    rows.push(Err(RowError::Malformed {
                        detail: err.to_string(),
                    }));
                }
            }
        }
        Ok(rows)
    }
}

impl ExpenseSource for CsvExpenseSource {
    fn rows(&mut self) -> Result<Vec<Result<RawRow, RowError>>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        Self::decode(file)
    }
}
