use crate::error::Result;
use std::fs;
use tracing::info;

/// Loads the raw SSSOM mapping text from a local path or an HTTP(S) URL.
///
/// Retrieval is synchronous; a failure here (missing file, network error,
/// non-2xx response) is fatal for the whole run.
pub fn load_mapping_text(source: &str) -> Result<String> {
    if source.starts_with("http") {
        info!(url = %source, "Fetching SSSOM mapping");
        let response = reqwest::blocking::get(source)?.error_for_status()?;
        Ok(response.text()?)
    } else {
        info!(path = %source, "Reading SSSOM mapping");
        Ok(fs::read_to_string(source)?)
    }
}
