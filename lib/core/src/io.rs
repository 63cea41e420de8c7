//! CSV input and output for [`Frame`].
//!
//! Cells are typed at load time via [`Value::parse`]; on write, every cell
//! renders through its `Display` impl so numeric columns round-trip without
//! quoting artifacts.

use crate::{Error, Frame, Result, Value};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a CSV file with a header row into a [`Frame`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Frame> {
    let file = File::open(path)?;
    read_csv_from(file)
}

/// Read CSV data with a header row from any reader.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Frame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(Error::MissingHeader);
    }

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record?;
        for (i, cell) in record.iter().enumerate() {
            columns[i].push(Value::parse(cell));
        }
    }

    Frame::from_columns(headers.into_iter().zip(columns).collect())
}

/// Write a [`Frame`] to a CSV file, header row first.
pub fn write_csv(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(frame, file)
}

/// Write a [`Frame`] as CSV to any writer.
pub fn write_csv_to<W: Write>(frame: &Frame, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(frame.names())?;
    for row in 0..frame.n_rows() {
        let record: Vec<String> = frame
            .row(row)?
            .into_iter()
            .map(|(_, value)| value.to_string())
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
