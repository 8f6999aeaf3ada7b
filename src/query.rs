use thiserror::Error;

use crate::columns::ColumnId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuffixError {
    #[error("invalid sql limit: have={0} want>0")]
    InvalidLimit(i64),
}

/// Trailing `order by` / `limit` portion of a select statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySuffix {
    /// `None` for no ordering.
    pub sort_by: Option<ColumnId>,
    pub ascending: bool,
    /// Zero or negative for no limit.
    pub limit: i64,
}

impl QuerySuffix {
    pub fn to_sql(&self) -> Result<String, SuffixError> {
        let mut parts = Vec::with_capacity(2);

        if let Some(column) = self.sort_by {
            parts.push(sort_sql(column.name(), self.ascending));
        }

        if self.limit > 0 {
            parts.push(limit_sql(self.limit)?);
        }

        Ok(join_nonempty(&parts, " "))
    }
}

pub fn sort_sql(column: &str, ascending: bool) -> String {
    let order = if ascending { "asc" } else { "desc" };
    format!("order by {column} {order}")
}

pub fn limit_sql(limit: i64) -> Result<String, SuffixError> {
    if limit <= 0 {
        return Err(SuffixError::InvalidLimit(limit));
    }
    Ok(format!("limit {limit}"))
}

/// Joins `parts` with `sep`, skipping empty strings.
pub fn join_nonempty<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    let mut out = String::new();
    for part in parts.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(part);
    }
    out
}
