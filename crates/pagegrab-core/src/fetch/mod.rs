//! Plain HTTP GET of one image into memory (libcurl easy handle).
//!
//! No custom headers, no retries. Redirects are followed.

mod error;

pub use error::FetchError;

use std::time::Duration;

use crate::config::FetchConfig;

/// Transfer limits for one GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchConfig::default().into()
    }
}

impl From<FetchConfig> for FetchOptions {
    fn from(cfg: FetchConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }
}

/// GETs `url` and returns the body. Blocks the current thread; use
/// [`fetch_bytes_async`] from async code.
pub fn fetch_bytes(url: &str, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

/// Runs [`fetch_bytes`] on the blocking thread pool.
pub async fn fetch_bytes_async(url: &str, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || fetch_bytes(&url, opts)).await?
}
