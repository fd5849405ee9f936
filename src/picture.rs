//! Picture identifiers and the remote publications that carry them.
//!
//! Every wallpaper is published as
//!
//! ```text
//! <asset base>/<tag>/gun__<id>_3.jpg
//! ```
//!
//! where `tag` is a month code such as `aug_24` and `id` grows with every
//! release. Locally the same picture is stored flat as `gun__<id>_3.jpg`.

use std::fmt;

use url::Url;

use crate::error::Result;

/// Sequence number of a published wallpaper.
///
/// Ordering is numeric: `gun__100` is newer than `gun__99`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PictureId(pub u64);

impl fmt::Display for PictureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PictureId {
    /// Name the picture is stored under, both remotely and on disk
    pub fn file_name(&self) -> String {
        format!("gun__{}_3.jpg", self.0)
    }
}

/// A wallpaper found on the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub tag: String,
    pub id: PictureId,
}

impl Publication {
    pub fn new(tag: impl Into<String>, id: u64) -> Self {
        Self {
            tag: tag.into(),
            id: PictureId(id),
        }
    }

    pub fn file_name(&self) -> String {
        self.id.file_name()
    }

    /// Rebuild the download url below `asset_base`
    pub fn download_url(&self, asset_base: &Url) -> Result<Url> {
        let url = asset_base.join(&format!("{}/{}", self.tag, self.file_name()))?;
        Ok(url)
    }
}

/// Sort newest first and drop repeated identifiers.
///
/// The listing page links most pictures more than once (thumbnail and
/// full size), the first occurrence wins.
pub fn newest_first(mut publications: Vec<Publication>) -> Vec<Publication> {
    publications.sort_by(|a, b| b.id.cmp(&a.id));
    publications.dedup_by(|a, b| a.id == b.id);
    publications
}
