//! Batch passenger files.
//!
//! A batch is a CSV file with one passenger per row. The header must carry
//! every column of [`schema::REQUIRED_BATCH_COLUMNS`]; `Name` is optional and
//! any other column is ignored. GroupSize is not read from the file: it is
//! derived from the PassengerId prefixes across the whole batch.
//!
//! Fields are decoded per row: a required field that is not valid UTF-8
//! fails only its own row, and `Name` is decoded lossily.

use crate::dataset::BatchError;
use crate::record::{group, schema, PassengerInput, RawRecord, RecordError};
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One row of a batch file.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRow {
    pub passenger_id: String,
    pub name: Option<String>,
    pub input: PassengerInput,
    issue: Option<RecordError>,
}

impl BatchRow {
    /// Builds the row's record, or the reason it cannot be built.
    pub fn record(&self) -> Result<RawRecord, RecordError> {
        match &self.issue {
            Some(issue) => Err(issue.clone()),
            None => self.input.to_record(),
        }
    }
}

/// All rows of a batch file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassengerBatch {
    rows: Vec<BatchRow>,
}

struct ColumnPositions {
    required: Vec<(&'static str, usize)>,
    name: Option<usize>,
}

impl ColumnPositions {
    fn from_headers(headers: &ByteRecord) -> Result<Self, BatchError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column.as_bytes())
        };

        let mut required = Vec::with_capacity(schema::REQUIRED_BATCH_COLUMNS.len());
        let mut missing = Vec::new();
        for column in schema::REQUIRED_BATCH_COLUMNS {
            match find(column) {
                Some(position) => required.push((column, position)),
                None => missing.push(column),
            }
        }
        if !missing.is_empty() {
            return Err(BatchError::MissingColumns(missing));
        }

        Ok(Self {
            required,
            name: find(schema::NAME),
        })
    }
}

impl PassengerBatch {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Reads a batch, checking the header before any row is processed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BatchError> {
        let mut csv = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let positions = ColumnPositions::from_headers(csv.byte_headers()?)?;

        let mut rows = Vec::new();
        for record in csv.byte_records() {
            rows.push(Self::read_row(&record?, &positions));
        }

        // An undecodable id joins no group.
        let ids: Vec<&str> = rows
            .iter()
            .map(|row| match row.issue {
                Some(RecordError::InvalidValue {
                    field: schema::PASSENGER_ID,
                    ..
                }) => "",
                _ => row.passenger_id.as_str(),
            })
            .collect();
        let sizes = group::group_sizes(&ids);
        for (row, size) in rows.iter_mut().zip(sizes) {
            row.input.set_group_size(size);
        }

        debug!(rows = rows.len(), "read passenger batch");
        Ok(Self { rows })
    }

    fn read_row(record: &ByteRecord, positions: &ColumnPositions) -> BatchRow {
        let mut input = PassengerInput::new();
        let mut passenger_id = String::new();
        let mut issue = None;

        for &(column, position) in &positions.required {
            let bytes = record.get(position).unwrap_or_default();
            let value = match std::str::from_utf8(bytes) {
                Ok(value) => value,
                Err(_) => {
                    let lossy = String::from_utf8_lossy(bytes).into_owned();
                    if column == schema::PASSENGER_ID {
                        passenger_id = lossy.clone();
                    }
                    issue.get_or_insert(RecordError::InvalidValue {
                        field: column,
                        value: lossy,
                    });
                    continue;
                }
            };
            match column {
                schema::PASSENGER_ID => passenger_id = value.to_string(),
                schema::CABIN => input.set_cabin(value),
                _ if value.is_empty() => {}
                _ => {
                    if let Err(err) = input.set(column, value) {
                        issue.get_or_insert(err);
                    }
                }
            }
        }

        if let Err(err) = group::group_id(&passenger_id) {
            issue.get_or_insert(err);
        }

        BatchRow {
            passenger_id,
            name: positions
                .name
                .and_then(|i| record.get(i))
                .filter(|name| !name.is_empty())
                .map(|name| String::from_utf8_lossy(name).into_owned()),
            input,
            issue,
        }
    }

    pub fn rows(&self) -> &[BatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
