mod client;
mod download;
mod index;
mod mirrors;

pub use client::HttpClient;
pub use download::{candidate_url, download_first_available, download_first_available_with};
pub use index::fetch_release_index;
pub use mirrors::fetch_mirror_bases;
