//! CLI for pagegrab.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagegrab_core::config::{self, PagegrabConfig};
use std::path::PathBuf;

use commands::{run_grab, run_replay};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pagegrab")]
#[command(about = "pagegrab: save every image of a paginated gallery viewer into one zip", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides shared by every command.
#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Directory the archive is written to (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Archive file name (default from config: gallery-images.zip).
    #[arg(long, value_name = "NAME")]
    pub output_name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open a gallery in a browser over WebDriver and archive its images.
    Grab {
        /// First page of the gallery viewer.
        url: String,

        /// WebDriver endpoint (overrides config).
        #[arg(long, value_name = "URL")]
        webdriver: Option<String>,

        /// Show the browser window instead of running headless.
        #[arg(long)]
        headed: bool,

        /// Pause after each "next" click, in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        settle_ms: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replay saved gallery pages (HTML files, in viewing order) and archive their images.
    Replay {
        /// Saved HTML pages.
        #[arg(required = true, value_name = "PAGE")]
        pages: Vec<PathBuf>,

        /// URL the pages were saved from, for resolving relative image sources.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

impl OutputArgs {
    /// Output directory and archive name after applying overrides to `cfg`.
    pub fn resolve(&self, cfg: &PagegrabConfig) -> Result<(PathBuf, String)> {
        let dir = match &self.output_dir {
            Some(d) => d.clone(),
            None => std::env::current_dir()?,
        };
        let name = self
            .output_name
            .clone()
            .unwrap_or_else(|| cfg.output_name.clone());
        Ok((dir, name))
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab {
                url,
                webdriver,
                headed,
                settle_ms,
                output,
            } => {
                let mut cfg = cfg;
                if let Some(w) = webdriver {
                    cfg.webdriver_url = w;
                }
                if headed {
                    cfg.headless = false;
                }
                if let Some(ms) = settle_ms {
                    cfg.settle_delay_ms = ms;
                }
                let (dir, name) = output.resolve(&cfg)?;
                run_grab(&cfg, &url, &dir, &name).await?;
            }
            CliCommand::Replay {
                pages,
                base_url,
                output,
            } => {
                let (dir, name) = output.resolve(&cfg)?;
                run_replay(&cfg, &pages, base_url.as_deref(), &dir, &name).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
