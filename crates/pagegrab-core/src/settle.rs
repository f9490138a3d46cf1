//! Wait applied after clicking "next" before the page is scanned again.
//!
//! The viewer loads the next image asynchronously and exposes no completion
//! signal, so the default is a fixed pause.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStrategy {
    /// Sleep for a fixed duration.
    Fixed(Duration),
    /// Do not wait (recorded pages, tests).
    Immediate,
}

impl Default for SettleStrategy {
    fn default() -> Self {
        SettleStrategy::Fixed(Duration::from_secs(2))
    }
}

impl SettleStrategy {
    pub async fn settle(&self) {
        match self {
            SettleStrategy::Fixed(delay) => tokio::time::sleep(*delay).await,
            SettleStrategy::Immediate => {}
        }
    }
}
