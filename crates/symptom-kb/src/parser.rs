//! Generic knowledge base file parser.
//!
//! Provides a streaming parser for tab-delimited knowledge base files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{KbError, KbResult};

/// Trait for types that can be parsed from knowledge base records.
pub trait KbRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> KbResult<Self>;
}

/// A streaming parser for knowledge base files.
///
/// Records are yielded in file order, which for rule files is the
/// declaration order.
pub struct KbParser<R: Read, T: KbRecord> {
    reader: Reader<R>,
    _marker: PhantomData<T>,
}

impl<T: KbRecord> KbParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> KbResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(KbError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: KbRecord> KbParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> KbResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            _marker: PhantomData,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> KbResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() != expected.len() {
            return Err(KbError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(KbError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses all records into a Vec, stopping at the first error.
    pub fn parse_all(self) -> KbResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: KbRecord> Iterator for KbParser<R, T> {
    type Item = KbResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    // Skip empty records, whatever their field count
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    let expected = T::EXPECTED_COLUMNS.len();
                    if record.len() != expected {
                        return Some(Err(KbError::InvalidRecord {
                            line: record.position().map_or(0, |p| p.line()),
                            expected,
                            found: record.len(),
                        }));
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing field values.
pub mod parse {
    /// Returns a trimmed field, or an empty string if the column is absent.
    pub fn field(record: &csv::StringRecord, index: usize) -> String {
        record.get(index).unwrap_or("").trim().to_string()
    }

    /// Splits a comma-separated list, dropping blank items.
    pub fn list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Expands literal `\n` escapes into line breaks.
    pub fn multiline(value: &str) -> String {
        value.replace("\\n", "\n")
    }
}
