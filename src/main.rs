//! wallpaper-sync
//!
//! Downloads the arsenal.com wallpapers that are not in `--dir` yet.
//!
//! Run it as often as you like: the newest picture on disk decides what
//! counts as new, so a second run right after the first fetches nothing.

use anyhow::Context;
use clap::Parser;
use wallpaper_sync::{logging, Args, Config, HttpFetcher, Syncer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_args(args)?;

    logging::init_logger(&config.work_dir).context("could not set up wallpaper.log")?;

    println!("Extracting wallpapers from arsenal.com .....");

    let fetcher = HttpFetcher::new()?;
    let syncer = Syncer::new(config, fetcher)
        .await
        .context("could not prepare wallpaper directory")?;
    let report = syncer.run().await.context("wallpaper sync failed")?;

    println!("{report}");

    Ok(())
}
