//! The fixed set of `moz_places` columns this tool knows how to show.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::places::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Id,
    Url,
    Title,
    VisitCount,
    Frecency,
    LastVisitDate,
    Description,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid column name: {0}")]
pub struct UnknownColumn(pub String);

static NAME_TO_ID: Lazy<HashMap<&'static str, ColumnId>> =
    Lazy::new(|| ColumnId::ALL.iter().map(|c| (c.name(), *c)).collect());

impl ColumnId {
    /// Every column, in table order.
    pub const ALL: [ColumnId; 7] = [
        ColumnId::Id,
        ColumnId::Url,
        ColumnId::Title,
        ColumnId::VisitCount,
        ColumnId::Frecency,
        ColumnId::LastVisitDate,
        ColumnId::Description,
    ];

    /// Canonical name, identical to the SQL column name.
    pub fn name(self) -> &'static str {
        match self {
            ColumnId::Id => "id",
            ColumnId::Url => "url",
            ColumnId::Title => "title",
            ColumnId::VisitCount => "visit_count",
            ColumnId::Frecency => "frecency",
            ColumnId::LastVisitDate => "last_visit_date",
            ColumnId::Description => "description",
        }
    }

    pub fn field(self, place: &Place) -> FieldValue<'_> {
        match self {
            ColumnId::Id => FieldValue::Integer(place.id),
            ColumnId::Url => FieldValue::Text(&place.url),
            ColumnId::Title => FieldValue::Text(&place.title),
            ColumnId::VisitCount => FieldValue::Integer(place.visit_count),
            ColumnId::Frecency => FieldValue::Integer(place.frecency),
            ColumnId::LastVisitDate => FieldValue::Timestamp(place.last_visit_date),
            ColumnId::Description => FieldValue::Text(&place.description),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnId {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TO_ID
            .get(s)
            .copied()
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// One field of a [`Place`], tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        Place {
            id: 7,
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            visit_count: 3,
            frecency: 250,
            last_visit_date: DateTime::<Utc>::from_timestamp(1, 0).expect("timestamp"),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for column in ColumnId::ALL {
            assert_eq!(column.name().parse::<ColumnId>(), Ok(column));
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "visits".parse::<ColumnId>(),
            Err(UnknownColumn("visits".to_string()))
        );
        assert!("URL".parse::<ColumnId>().is_err());
    }

    #[test]
    fn extracts_typed_fields() {
        let place = sample_place();
        assert_eq!(ColumnId::Id.field(&place), FieldValue::Integer(7));
        assert_eq!(
            ColumnId::Url.field(&place),
            FieldValue::Text("https://example.com")
        );
        assert_eq!(ColumnId::Frecency.field(&place), FieldValue::Integer(250));
        assert_eq!(
            ColumnId::LastVisitDate.field(&place),
            FieldValue::Timestamp(place.last_visit_date)
        );
        assert_eq!(ColumnId::Description.field(&place), FieldValue::Text("desc"));
    }
}
