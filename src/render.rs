//! Output formatting for selected places.
//!
//! Two formats: a fixed-width text table (one line per place) and a single
//! pretty-printed JSON array.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::columns::{ColumnId, FieldValue};
use crate::config::Config;
use crate::places::Place;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Minimum field widths for table output. Longer values are never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub numeric_width: usize,
    pub text_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for TableLayout {
    fn from(cfg: &Config) -> Self {
        Self {
            numeric_width: cfg.numeric_width,
            text_width: cfg.text_width,
        }
    }
}

/// Writes one line per place, fields left-justified and separated by a space.
pub fn write_table<W: Write>(
    out: &mut W,
    places: &[Place],
    columns: &[ColumnId],
    layout: TableLayout,
) -> Result<(), RenderError> {
    for place in places {
        let line = format_row(place, columns, layout);
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn format_row(place: &Place, columns: &[ColumnId], layout: TableLayout) -> String {
    let mut line = String::new();
    for (i, column) in columns.iter().enumerate() {
        if i != 0 {
            line.push(' ');
        }
        match column.field(place) {
            FieldValue::Integer(v) => {
                line.push_str(&format!("{:<width$}", v, width = layout.numeric_width));
            }
            FieldValue::Text(s) => {
                line.push_str(&format!("{:<width$}", s, width = layout.text_width));
            }
            FieldValue::Timestamp(ts) => {
                let s = ts.format("%Y-%m-%d %H:%M:%S%.6f UTC").to_string();
                line.push_str(&format!("{:<width$}", s, width = layout.text_width));
            }
        }
    }
    line
}

/// Writes every place as a JSON object keyed by column name, all wrapped in
/// one array and followed by a newline.
pub fn write_json<W: Write>(
    out: &mut W,
    places: &[Place],
    columns: &[ColumnId],
) -> Result<(), RenderError> {
    let objects: Vec<Map<String, Value>> = places
        .iter()
        .map(|place| place_to_map(place, columns))
        .collect();

    let mut ser =
        serde_json::Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"    "));
    objects.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Builds the JSON object for one place. A repeated column yields one key.
pub fn place_to_map(place: &Place, columns: &[ColumnId]) -> Map<String, Value> {
    let mut map = Map::new();
    for column in columns {
        map.insert(column.name().to_string(), field_to_json(column.field(place)));
    }
    map
}

fn field_to_json(field: FieldValue<'_>) -> Value {
    match field {
        FieldValue::Integer(v) => Value::from(v),
        FieldValue::Text(s) => Value::from(s),
        FieldValue::Timestamp(ts) => Value::from(timestamp_to_json(ts)),
    }
}

/// RFC 3339 in UTC with microsecond precision, e.g. `1970-01-01T00:00:01.000000Z`.
pub fn timestamp_to_json(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
