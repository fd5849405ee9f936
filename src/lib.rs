//! wallpaper-sync
//!
//! Keeps a local folder of arsenal.com fanzone wallpapers up to date.
//!
//! Every wallpaper carries a sequence number in its file name, e.g.
//! `gun__130_3.jpg`. The highest number already on disk is the baseline;
//! anything on the listing page above it is downloaded, newest first.
//! The folder itself is the only state, there is no manifest.

pub mod config;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod local;
pub mod logging;
pub mod picture;
pub mod sync;

pub use config::{Args, Config};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use picture::{PictureId, Publication};
pub use sync::{SyncReport, Syncer};
