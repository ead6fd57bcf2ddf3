use zigman_core::{parse_mirror_list, COMMUNITY_MIRRORS_URL};

use crate::client::HttpClient;

pub fn fetch_mirror_bases(client: &HttpClient) -> Vec<String> {
    match client.fetch_text(COMMUNITY_MIRRORS_URL) {
        Ok(raw) => parse_mirror_list(&raw),
        Err(err) => {
            log::warn!("mirror list unavailable, using the canonical source only: {err:#}");
            Vec::new()
        }
    }
}
