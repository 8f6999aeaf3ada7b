use std::io::BufWriter;

use anyhow::{Context, Result};
use tracing::debug;

use ffhist::{app, cli, config, logging};

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    let cfg = config::load_config(cli_opts.config_path.as_deref())
        .context("failed to load config")?;
    debug!(
        "table={} columns={:?} sort_by={} reverse={} limit={} json={} temp_copy={}",
        cfg.table,
        cli_opts.columns,
        cli_opts.sort_by,
        cli_opts.reverse,
        cli_opts.limit,
        cli_opts.json,
        cli_opts.temp_copy
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&cli_opts, &cfg, &mut out)
}
