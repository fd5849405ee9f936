use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::error::Result;

pub const LISTING_URL: &str = "http://www.arsenal.com/fanzone/wallpapers";
// trailing slash matters, image urls are joined below it
pub const ASSET_BASE: &str = "http://www.arsenal.com/assets/_files/desktops/";

/// Tool to obtain new arsenal.com wallpapers
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory in which wallpapers will be downloaded to
    #[arg(short, long)]
    pub dir: PathBuf,
}

/// Everything a sync run needs, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Where wallpapers are kept
    pub target_dir: PathBuf,
    /// Where the listing page and fresh downloads land first
    pub work_dir: PathBuf,
    pub listing_url: Url,
    pub asset_base: Url,
}

impl Config {
    pub fn new(target_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            target_dir: target_dir.into(),
            work_dir: work_dir.into(),
            listing_url: Url::parse(LISTING_URL)?,
            asset_base: Url::parse(ASSET_BASE)?,
        })
    }

    /// Config for a command line run, working in the current directory
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::new(args.dir, cwd)
    }

    /// Point both remote urls somewhere else
    pub fn with_remote(mut self, listing_url: Url, mut asset_base: Url) -> Self {
        if !asset_base.path().ends_with('/') {
            let path = format!("{}/", asset_base.path());
            asset_base.set_path(&path);
        }
        self.listing_url = listing_url;
        self.asset_base = asset_base;
        self
    }
}
