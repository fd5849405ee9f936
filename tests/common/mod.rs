use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use url::Url;
use wallpaper_sync::{Config, Error, Fetch, Result};

pub const LISTING_URL: &str = "http://wallpapers.test/fanzone/wallpapers";
pub const ASSET_BASE: &str = "http://wallpapers.test/assets/_files/desktops/";

/// Smallest payload `file-format` recognises as a JPEG
pub const JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];

/// In-memory stand-in for the network that remembers what was asked for
#[derive(Debug, Clone, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    images: HashMap<String, Vec<u8>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    /// Listing page for `pictures` with an image behind every entry
    pub fn with_pictures(pictures: &[(&str, u64)]) -> Self {
        let mut fetcher = Self::default().with_listing(pictures);
        for (tag, id) in pictures {
            fetcher = fetcher.with_image(tag, *id);
        }
        fetcher
    }

    pub fn with_listing(mut self, pictures: &[(&str, u64)]) -> Self {
        self.pages
            .insert(LISTING_URL.to_string(), listing_page(pictures));
        self
    }

    pub fn with_image(mut self, tag: &str, id: u64) -> Self {
        self.images.insert(image_url(tag, id), JPEG.to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Image urls requested so far, in order
    pub fn image_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| url != LISTING_URL)
            .collect()
    }

    fn record(&self, url: &Url) {
        self.requests.lock().unwrap().push(url.to_string());
    }
}

impl Fetch for FakeFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        self.record(url);
        self.pages.get(url.as_str()).cloned().ok_or_else(|| not_found(url))
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        self.record(url);
        self.images.get(url.as_str()).cloned().ok_or_else(|| not_found(url))
    }
}

fn not_found(url: &Url) -> Error {
    Error::Status {
        url: url.to_string(),
        status: 404,
    }
}

pub fn image_url(tag: &str, id: u64) -> String {
    format!("{ASSET_BASE}{tag}/gun__{id}_3.jpg")
}

/// Roughly what the fanzone page looks like, listing order is not sorted
pub fn listing_page(pictures: &[(&str, u64)]) -> String {
    let items: String = pictures
        .iter()
        .map(|(tag, id)| {
            format!(
                "<li><a href=\"/assets/_files/desktops/{tag}/gun__{id}_3.jpg\">\
                 <img src=\"/assets/_files/desktops/{tag}/gun__{id}_1.jpg\"></a></li>\n"
            )
        })
        .collect();
    format!("<html><body><ul class=\"wallpapers\">\n{items}</ul></body></html>")
}

pub fn config(target_dir: &Path, work_dir: &Path) -> Config {
    Config::new(target_dir, work_dir).unwrap().with_remote(
        Url::parse(LISTING_URL).unwrap(),
        Url::parse(ASSET_BASE).unwrap(),
    )
}

pub fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), JPEG).unwrap();
}

/// Sorted file names in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
