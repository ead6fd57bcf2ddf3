use std::path::Path;

use anyhow::{anyhow, Result};

use crate::client::HttpClient;

pub fn candidate_url(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}

pub fn download_first_available(
    client: &HttpClient,
    bases: &[String],
    filenames: &[String],
    dest: &Path,
) -> Result<String> {
    download_first_available_with(
        bases,
        filenames,
        |url| client.probe(url),
        |url| client.fetch_to_file(url, dest),
    )
}

/// Probes every `(base url, filename)` combination in order and fetches the
/// first one that exists. Failed fetches fall through to the next
/// candidate; only exhausting every combination is fatal. `dest` may be
/// left behind on failure.
pub fn download_first_available_with<Probe, Fetch>(
    bases: &[String],
    filenames: &[String],
    mut probe: Probe,
    mut fetch: Fetch,
) -> Result<String>
where
    Probe: FnMut(&str) -> bool,
    Fetch: FnMut(&str) -> Result<()>,
{
    for base in bases {
        for filename in filenames {
            let url = candidate_url(base, filename);
            if !probe(&url) {
                log::debug!("no archive at {url}");
                continue;
            }
            match fetch(&url) {
                Ok(()) => return Ok(url),
                Err(err) => {
                    log::warn!("download from {url} failed, trying next candidate: {err:#}");
                }
            }
        }
    }

    Err(anyhow!(
        "all mirrors and the canonical source were exhausted: none of {} base url(s) served any of {} candidate filename(s)",
        bases.len(),
        filenames.len()
    ))
}
