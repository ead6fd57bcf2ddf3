use anyhow::Result;
use zigman_core::{ReleaseIndex, RELEASE_INDEX_URL};

use crate::client::HttpClient;

pub fn fetch_release_index(client: &HttpClient) -> Result<ReleaseIndex> {
    let raw = client.fetch_text(RELEASE_INDEX_URL)?;
    ReleaseIndex::from_json_str(&raw)
}
