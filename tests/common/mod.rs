//! Shared fixtures: small `moz_places` databases on disk.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

use ffhist::cli::CliOptions;
use ffhist::config::Config;

pub const CREATE_PLACES: &str = "CREATE TABLE moz_places (
    id INTEGER PRIMARY KEY,
    url LONGVARCHAR,
    title LONGVARCHAR,
    rev_host LONGVARCHAR,
    visit_count INTEGER DEFAULT 0,
    hidden INTEGER DEFAULT 0 NOT NULL,
    typed INTEGER DEFAULT 0 NOT NULL,
    frecency INTEGER DEFAULT -1 NOT NULL,
    last_visit_date INTEGER,
    guid TEXT,
    description TEXT
)";

pub struct Fixture {
    // Keeps the directory alive for the duration of the test.
    pub _dir: TempDir,
    pub db_path: PathBuf,
}

/// Two places: `http://a` (frecency 100, epoch) and `http://b` (frecency 50,
/// two seconds after epoch).
pub fn two_places() -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("places.sqlite");
    let conn = Connection::open(&db_path).expect("conn");
    conn.execute(CREATE_PLACES, []).expect("create");
    insert_place(&conn, 1, "http://a", 5, 100, 0);
    insert_place(&conn, 2, "http://b", 1, 50, 2_000_000);
    drop(conn);
    Fixture { _dir: dir, db_path }
}

pub fn insert_place(
    conn: &Connection,
    id: i64,
    url: &str,
    visit_count: i64,
    frecency: i64,
    last_visit_date: i64,
) {
    conn.execute(
        "INSERT INTO moz_places (id, url, title, visit_count, frecency, last_visit_date, description)
         VALUES (?1, ?2, '', ?3, ?4, ?5, '')",
        (id, url, visit_count, frecency, last_visit_date),
    )
    .expect("insert place");
}

pub fn options(args: &[&str], db_path: &Path) -> CliOptions {
    let mut argv = vec!["ffhist".to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    argv.push(db_path.to_string_lossy().to_string());
    <CliOptions as clap::Parser>::try_parse_from(argv).expect("parse args")
}

/// Default config with snapshots confined to `temp_dir`.
pub fn config_with_temp_dir(temp_dir: &Path) -> Config {
    Config {
        temp_dir: Some(temp_dir.to_path_buf()),
        ..Config::default()
    }
}

pub fn run_to_string(opts: &CliOptions, cfg: &Config) -> anyhow::Result<String> {
    let mut out = Vec::new();
    ffhist::app::run(opts, cfg, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8"))
}

pub fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).expect("read_dir").next().is_none()
}
