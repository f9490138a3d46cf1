use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// CSS selectors and markers used to read the gallery viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySelectors {
    /// Selector matching every image-bearing element.
    pub image: String,
    /// Attribute consulted when an image has no usable `src`.
    pub fallback_attr: String,
    /// Selector for the viewer's "next page" control.
    pub next: String,
    /// Class that marks the next control as disabled.
    pub disabled_class: String,
}

impl Default for GallerySelectors {
    fn default() -> Self {
        Self {
            image: "img".to_string(),
            fallback_attr: "ng-src".to_string(),
            next: "a.photo-navigation-link-next".to_string(),
            disabled_class: "disabled".to_string(),
        }
    }
}

/// Timeouts for image fetches (optional section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    /// Upper bound on a single image transfer.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 120,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/pagegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagegrabConfig {
    /// WebDriver endpoint (geckodriver / chromedriver).
    pub webdriver_url: String,
    /// Ask the browser to run without a window.
    pub headless: bool,
    /// Pause after clicking "next" before the page is scanned again.
    pub settle_delay_ms: u64,
    /// Name of the archive written at the end of a run.
    pub output_name: String,
    #[serde(default)]
    pub selectors: GallerySelectors,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for PagegrabConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            headless: true,
            settle_delay_ms: 2000,
            output_name: "gallery-images.zip".to_string(),
            selectors: GallerySelectors::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl PagegrabConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagegrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PagegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PagegrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
