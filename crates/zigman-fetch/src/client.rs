use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PROBE_TIMEOUT: Duration = Duration::from_secs(15);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build http client")?;
        Ok(Self { inner })
    }

    pub fn probe(&self, url: &str) -> bool {
        match self.inner.head(url).timeout(PROBE_TIMEOUT).send() {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::debug!("probe of {url} failed: {err}");
                false
            }
        }
    }

    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .inner
            .get(url)
            .send()
            .with_context(|| format!("request failed: {url}"))?
            .error_for_status()
            .with_context(|| format!("request rejected: {url}"))?;
        response
            .text()
            .with_context(|| format!("failed to read response body: {url}"))
    }

    pub fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self
            .inner
            .get(url)
            .send()
            .with_context(|| format!("request failed: {url}"))?
            .error_for_status()
            .with_context(|| format!("request rejected: {url}"))?;

        let mut file =
            File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
        io::copy(&mut response, &mut file)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        Ok(())
    }
}
