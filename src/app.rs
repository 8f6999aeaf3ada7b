use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliOptions;
use crate::config::Config;
use crate::places::{self, Place, PlacesError};
use crate::query::QuerySuffix;
use crate::render::{self, TableLayout};
use crate::snapshot::Snapshot;

/// Appended to busy/locked errors.
pub const LOCKED_HINT: &str = "maybe firefox is using the database; specify -t flag";

/// Reads the places selected by `opts` and writes them to `out`.
pub fn run<W: Write>(opts: &CliOptions, cfg: &Config, out: &mut W) -> Result<()> {
    // Declared before any connection so it is removed after the connection closes.
    let snapshot = if opts.temp_copy {
        let snapshot = Snapshot::create(&opts.db_path, &cfg.temp_prefix, cfg.temp_dir.as_deref())?;
        Some(snapshot)
    } else {
        None
    };

    let (db_path, read_only) = match &snapshot {
        Some(s) => (s.path(), false),
        None => (opts.db_path.as_path(), true),
    };

    let suffix = QuerySuffix {
        sort_by: Some(opts.sort_by),
        ascending: !opts.reverse,
        limit: opts.limit,
    };

    let places = read_places(db_path, read_only, &cfg.table, &suffix)
        .map_err(|err| with_lock_hint(err, &opts.db_path))?;
    info!("read {} places from {}", places.len(), opts.db_path.display());

    if opts.json {
        render::write_json(out, &places, &opts.columns)?;
    } else {
        render::write_table(out, &places, &opts.columns, TableLayout::from(cfg))?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn read_places(
    path: &Path,
    read_only: bool,
    table: &str,
    suffix: &QuerySuffix,
) -> Result<Vec<Place>, PlacesError> {
    let conn = places::open_places(path, read_only)?;
    places::select_places(&conn, table, suffix)
}

/// Wraps `err` in a context line naming the database. The sqlite message
/// itself is only printed once, as the cause.
fn with_lock_hint(err: PlacesError, db_path: &Path) -> anyhow::Error {
    let msg = if err.is_locked() {
        format!("failed to read {}: {LOCKED_HINT}", db_path.display())
    } else {
        format!("failed to read {}", db_path.display())
    };
    anyhow::Error::new(err).context(msg)
}
