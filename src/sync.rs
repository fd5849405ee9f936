use std::fmt;
use std::path::{Path, PathBuf};

use file_format::FileFormat;
use log::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::listing::ListingFile;
use crate::local::{ensure_directory, latest_local_picture};
use crate::picture::{PictureId, Publication};

/// Leading run of `newest_first` that is newer than `baseline`.
///
/// Scanning stops at the first publication that is not newer, nothing
/// after it can be.
pub fn newer_than(newest_first: &[Publication], baseline: PictureId) -> &[Publication] {
    let count = newest_first
        .iter()
        .take_while(|publication| publication.id > baseline)
        .count();
    &newest_first[..count]
}

/// Outcome of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub baseline: PictureId,
    /// Final location of every picture stored during the run, newest first
    pub downloaded: Vec<PathBuf>,
}

impl SyncReport {
    pub fn count(&self) -> usize {
        self.downloaded.len()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count() {
            0 => write!(f, "No new pictures found!"),
            n => write!(f, "{n} pictures downloaded!"),
        }
    }
}

/// Keeps a wallpaper directory in step with the remote listing.
///
/// The target directory and the baseline are settled when the syncer is
/// built and stay fixed for the whole run.
#[derive(Debug)]
pub struct Syncer<F> {
    config: Config,
    fetcher: F,
    target_dir: PathBuf,
    work_dir: PathBuf,
    baseline: PictureId,
}

impl<F: Fetch> Syncer<F> {
    /// Prepare the target directory and read its baseline
    pub async fn new(config: Config, fetcher: F) -> Result<Self> {
        let target_dir = ensure_directory(&config.target_dir).await?;
        let work_dir = tokio::fs::canonicalize(&config.work_dir).await?;
        let baseline = latest_local_picture(&target_dir).await?;
        info!(
            "Latest picture in {} is {}",
            target_dir.display(),
            baseline
        );

        Ok(Self {
            config,
            fetcher,
            target_dir,
            work_dir,
            baseline,
        })
    }

    pub fn baseline(&self) -> PictureId {
        self.baseline
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Download every remote picture newer than the baseline.
    ///
    /// The first failure ends the run. Pictures stored before it stay where
    /// they are, the listing file is removed either way.
    pub async fn run(&self) -> Result<SyncReport> {
        let listing =
            ListingFile::download(&self.fetcher, &self.config.listing_url, &self.work_dir).await?;
        let publications = listing.publications().await?;

        let mut report = SyncReport {
            baseline: self.baseline,
            downloaded: Vec::new(),
        };

        let fresh = newer_than(&publications, self.baseline);
        if fresh.is_empty() {
            info!("No pictures newer than {}", self.baseline);
            return Ok(report);
        }

        for publication in fresh {
            let stored = self.download(publication).await?;
            report.downloaded.push(stored);
        }

        info!("{} pictures downloaded", report.count());
        Ok(report)
    }

    async fn download(&self, publication: &Publication) -> Result<PathBuf> {
        let url = publication.download_url(&self.config.asset_base)?;
        info!("Fetching image from url {url}");
        let bytes = self.fetcher.fetch_bytes(&url).await?;

        let format = FileFormat::from_bytes(&bytes);
        if format.media_type() == "image/jpeg" {
            debug!("Downloaded {} bytes ({})", bytes.len(), format.media_type());
        } else {
            warn!(
                "{url} is not a JPEG ({}, {} bytes), storing it anyway",
                format.media_type(),
                bytes.len()
            );
        }

        // staged under a fresh name, removed on drop unless persisted
        let file_name = publication.file_name();
        let staged = tempfile::Builder::new()
            .prefix(&format!("{file_name}."))
            .suffix(".part")
            .tempfile_in(&self.work_dir)?;
        tokio::fs::write(staged.path(), &bytes).await?;

        let stored = self.target_dir.join(&file_name);
        if self.work_dir == self.target_dir {
            debug!("Renaming {} to {}", staged.path().display(), file_name);
            staged.persist(&stored).map_err(std::io::Error::from)?;
            return Ok(stored);
        }

        info!(
            "Copying picture {} to {} ....",
            file_name,
            self.target_dir.display()
        );
        tokio::fs::copy(staged.path(), &stored).await?;
        staged.close()?;

        Ok(stored)
    }
}
