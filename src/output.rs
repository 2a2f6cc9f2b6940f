use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Error;
use crate::error::Error::UnexpectedPayload;
use crate::model::OutputFormat;

/// Renders a service response either to the console or into a destination file.
pub struct OutputWriter;

impl OutputWriter {
    pub fn write<W: Write>(
        payload: &Value,
        destination: Option<&Path>,
        format: OutputFormat,
        console: &mut W,
    ) -> Result<(), Error> {
        match format {
            OutputFormat::Csv => write_csv(payload, destination, console),
            OutputFormat::Json => write_json(payload, destination, console),
        }
    }
}

fn rows(payload: &Value) -> Option<&Vec<Value>> {
    payload.get("data").and_then(Value::as_array)
}

fn print_raw<W: Write>(payload: &Value, console: &mut W) -> Result<(), Error> {
    debug!("response has no data collection, printing the raw payload");
    serde_json::to_writer(&mut *console, payload)?;
    writeln!(console)?;
    Ok(())
}

fn write_csv<W: Write>(
    payload: &Value,
    destination: Option<&Path>,
    console: &mut W,
) -> Result<(), Error> {
    let Some(rows) = rows(payload) else {
        return print_raw(payload, console);
    };

    match destination {
        Some(path) => {
            debug!(path = %path.display(), rows = rows.len(), "writing csv file");
            let mut writer = csv::Writer::from_path(path)?;
            write_records(&mut writer, rows)?;
            writer.flush()?;
        }
        None => {
            let mut writer = csv::Writer::from_writer(&mut *console);
            write_records(&mut writer, rows)?;
            writer.flush()?;
        }
    }
    Ok(())
}

// Header comes from the first row; every row is laid out along those columns.
// A first row without keys yields no columns, so nothing is written.
fn write_records<W: Write>(writer: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), Error> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let header: Vec<&String> = as_object(first)?.keys().collect();
    if header.is_empty() {
        debug!("first data row has no columns, csv output skipped");
        return Ok(());
    }
    writer.write_record(&header)?;

    for row in rows {
        let row = as_object(row)?;
        writer.write_record(header.iter().map(|column| cell(row.get(*column))))?;
    }
    Ok(())
}

fn as_object(row: &Value) -> Result<&Map<String, Value>, Error> {
    row.as_object().ok_or_else(|| {
        UnexpectedPayload(format!("Expected every data row to be an object, got: {row}"))
    })
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn write_json<W: Write>(
    payload: &Value,
    destination: Option<&Path>,
    console: &mut W,
) -> Result<(), Error> {
    let Some(data) = payload.get("data") else {
        return print_raw(payload, console);
    };

    match destination {
        Some(path) => {
            debug!(path = %path.display(), "appending json to file");
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            write_pretty(&mut file, data)?;
        }
        None => {
            serde_json::to_writer(&mut *console, data)?;
            writeln!(console)?;
        }
    }
    Ok(())
}

fn write_pretty(file: &mut File, data: &Value) -> Result<(), Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut *file, formatter);
    data.serialize(&mut serializer)?;
    file.flush()?;
    Ok(())
}
