//! arxload — load per-document Dublin Core XML into PostgreSQL.
//!
//! Run with: cargo run -p arxload-cli -- <DATA_DIR> <DBNAME>

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arxload_cli::pipeline;
use arxload_db::ArticleStore;

/// Parse per-document XML metadata files and insert them into a database.
#[derive(Debug, Parser)]
#[command(name = "arxload", version, about)]
struct Cli {
    /// Path to the folder of XML files.
    data_dir: PathBuf,

    /// Name of the destination PostgreSQL database.
    dbname: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(data_dir = %cli.data_dir.display(), dbname = %cli.dbname, "starting arxload");

    let store = ArticleStore::connect(&cli.dbname).await?;
    pipeline::run(&store, &cli.data_dir).await?;

    // Per-file failures are already counted and reported; a run that got
    // this far exits 0 regardless of how many files failed.
    Ok(())
}
