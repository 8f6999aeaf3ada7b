use std::path::PathBuf;

use clap::Parser;

use crate::columns::ColumnId;

const AFTER_HELP: &str = "Columns:
  id
  url
  title
  visit_count
  frecency
  last_visit_date
  description";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints the contents of a firefox \"places\" database.",
    after_help = AFTER_HELP
)]
pub struct CliOptions {
    /// Path to the places database (places.sqlite)
    pub db_path: PathBuf,

    /// Copy database to temp file before opening; required if firefox is running
    #[arg(short = 't', long)]
    pub temp_copy: bool,

    /// Comma-separated list of column names to display
    #[arg(
        short = 'c',
        long,
        value_delimiter = ',',
        value_parser = parse_column,
        default_values_t = [ColumnId::LastVisitDate, ColumnId::Url]
    )]
    pub columns: Vec<ColumnId>,

    /// Name of column to sort by
    #[arg(
        short = 's',
        long,
        value_parser = parse_column,
        default_value_t = ColumnId::LastVisitDate
    )]
    pub sort_by: ColumnId,

    /// Reverse sort order
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Encode output as json
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Max rows to include in output (0 for no limit)
    #[arg(short = 'n', long, default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,

    /// Optional path to config file (YAML)
    #[arg(long)]
    pub config_path: Option<PathBuf>,
}

fn parse_column(name: &str) -> Result<ColumnId, String> {
    name.parse::<ColumnId>().map_err(|err| err.to_string())
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
