//! The listing page: fetched once per run, kept on disk while the run is in
//! progress and removed again when the [`ListingFile`] goes away.

use std::path::Path;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use tempfile::NamedTempFile;
use url::Url;

use crate::error::Result;
use crate::fetch::Fetch;
use crate::picture::{newest_first, Publication};

static REMOTE_PICTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/assets/_files/desktops/(\w+_\d+)/gun__(\d+)_3\.jpg")
        .expect("remote picture pattern")
});

const FALLBACK_NAME: &str = "index";

/// Downloaded listing page, deleted on drop.
///
/// The file gets a fresh name in the working directory, so it never
/// clobbers whatever already lives there.
#[derive(Debug)]
pub struct ListingFile {
    file: NamedTempFile,
}

impl ListingFile {
    /// Fetch `url` and store the page in `work_dir`
    pub async fn download<F: Fetch>(fetcher: &F, url: &Url, work_dir: &Path) -> Result<Self> {
        info!("Fetching wallpaper listing from {url}");
        let body = fetcher.fetch_text(url).await?;

        let file = tempfile::Builder::new()
            .prefix(&format!("{}.", name_prefix_for(url)))
            .suffix(".html")
            .tempfile_in(work_dir)?;
        tokio::fs::write(file.path(), body.as_bytes()).await?;
        debug!("Stored {} bytes of listing in {}", body.len(), file.path().display());

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Parse the stored page into publications, newest first
    pub async fn publications(&self) -> Result<Vec<Publication>> {
        let contents = tokio::fs::read_to_string(self.path()).await?;
        let found = parse_listing(&contents);
        info!("Found {} pictures on the listing page", found.len());
        Ok(found)
    }
}

fn name_prefix_for(url: &Url) -> &str {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME)
}

/// Extract every picture referenced by the page, sorted newest first
pub fn parse_listing(contents: &str) -> Vec<Publication> {
    let found = REMOTE_PICTURE
        .captures_iter(contents)
        .filter_map(|caps| match caps[2].parse::<u64>() {
            Ok(id) => Some(Publication::new(&caps[1], id)),
            Err(e) => {
                warn!("Skipping {}: {e}", &caps[0]);
                None
            }
        })
        .collect();

    newest_first(found)
}
