use std::path::{Path, PathBuf};

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::picture::PictureId;

static LOCAL_PICTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^gun__(\d+)_3\.jpg$").expect("local picture pattern"));

/// Identifier encoded in a local file name, if it is one of ours
pub fn picture_id_from_file_name(name: &str) -> Option<PictureId> {
    let caps = LOCAL_PICTURE.captures(name)?;
    match caps[1].parse::<u64>() {
        Ok(id) => Some(PictureId(id)),
        Err(e) => {
            warn!("Ignoring {name}: {e}");
            None
        }
    }
}

/// Create `dir` if missing and return its absolute path
pub async fn ensure_directory(dir: &Path) -> Result<PathBuf> {
    match tokio::fs::metadata(dir).await {
        Ok(meta) if !meta.is_dir() => return Err(Error::NotADirectory(dir.to_path_buf())),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("Creating wallpaper directory {}", dir.display());
            tokio::fs::create_dir_all(dir).await?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(tokio::fs::canonicalize(dir).await?)
}

/// Highest picture already stored in `dir`, `PictureId(0)` when there is none
pub async fn latest_local_picture(dir: &Path) -> Result<PictureId> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    info!("Current files in wallpaper directory: {names:?}");

    let latest = names
        .iter()
        .filter_map(|name| picture_id_from_file_name(name))
        .max()
        .unwrap_or_default();

    Ok(latest)
}
