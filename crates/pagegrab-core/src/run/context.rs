//! State owned by one run: seen-set, manifest, archive accumulator.

use std::collections::HashSet;

use crate::archive::Accumulator;
use crate::url_model::derive_filename;

/// One image queued for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Absolute `http(s)` address.
    pub url: String,
    /// Archive entry name derived from the last path segment.
    pub filename: String,
}

impl ImageRecord {
    pub fn new(url: String) -> Self {
        let filename = derive_filename(&url);
        Self { url, filename }
    }
}

/// Phases of a run. Transitions only go forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Collecting,
    Archiving,
    Done,
}

/// Everything one run accumulates. The seen-set and the manifest always
/// hold the same addresses; the manifest keeps encounter order.
#[derive(Debug)]
pub struct RunContext {
    seen: HashSet<String>,
    manifest: Vec<ImageRecord>,
    accumulator: Accumulator,
    phase: RunPhase,
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            manifest: Vec::new(),
            accumulator: Accumulator::new(),
            phase: RunPhase::Collecting,
        }
    }

    /// Queues `url` unless it was seen before. Returns the new record.
    pub fn queue(&mut self, url: String) -> Option<&ImageRecord> {
        if !self.seen.insert(url.clone()) {
            return None;
        }
        self.manifest.push(ImageRecord::new(url));
        self.manifest.last()
    }

    pub fn is_seen(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn manifest(&self) -> &[ImageRecord] {
        &self.manifest
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn accumulator_mut(&mut self) -> &mut Accumulator {
        &mut self.accumulator
    }

    /// Manifest and accumulator borrowed together, for the fetch loop.
    pub(crate) fn split_for_fetch(&mut self) -> (&[ImageRecord], &mut Accumulator) {
        (&self.manifest, &mut self.accumulator)
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Moves to `next`. Going backwards is ignored.
    pub fn advance_phase(&mut self, next: RunPhase) {
        let rank = |p: RunPhase| match p {
            RunPhase::Collecting => 0,
            RunPhase::Archiving => 1,
            RunPhase::Done => 2,
        };
        if rank(next) > rank(self.phase) {
            tracing::debug!(from = ?self.phase, to = ?next, "run phase");
            self.phase = next;
        }
    }
}
