//! Parser run metrics.
//!
//! `Parser::run` skips all of this; `Parser::run_with_metrics` records, per
//! phase, how many match attempts were made, which aliases matched and how
//! long the phase took. The verbose API and the CLI report are built from
//! these records.

use super::matcher::Match;
use crate::{ParseResult, TagAction};
use std::fmt;
use std::time::Duration;

/// The passes of a parse, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Single pass over the work dictionary.
    Work,
    /// Bounded passes over the other dictionary.
    Other,
    /// Bounded passes over the work dictionary on what is left.
    WorkRescan,
    /// The all-spell marker check.
    AllSpell,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Other => "other",
            Phase::WorkRescan => "work-rescan",
            Phase::AllSpell => "all-spell",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A match together with the phase it happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub phase: Phase,
    pub start: usize,
    pub alias: String,
    pub action: TagAction,
}

impl MatchRecord {
    pub(crate) fn new(phase: Phase, m: Match) -> Self {
        Self { phase, start: m.start, alias: m.alias, action: m.action }
    }
}

/// Timing and matches for a single phase.
#[derive(Debug, Clone)]
pub struct PhaseMetrics {
    pub phase: Phase,
    /// Number of `try_match` calls (or marker checks) made.
    pub attempts: usize,
    pub matches: Vec<MatchRecord>,
    pub duration: Duration,
}

impl PhaseMetrics {
    pub(crate) fn new(phase: Phase) -> Self {
        Self { phase, attempts: 0, matches: Vec::new(), duration: Duration::ZERO }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`](super::Parser::run_with_metrics).
    pub total: Duration,
    pub phases: Vec<PhaseMetrics>,
    /// Buffer content nothing matched.
    pub leftover: String,
}

impl RunMetrics {
    /// Match attempts summed over the dictionary phases.
    pub fn match_attempts(&self) -> usize {
        self.phases.iter().filter(|p| p.phase != Phase::AllSpell).map(|p| p.attempts).sum()
    }

    /// All matches in the order they were applied.
    pub fn matches(&self) -> impl Iterator<Item = &MatchRecord> {
        self.phases.iter().flat_map(|p| p.matches.iter())
    }
}

/// Parser output bundled with metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub result: ParseResult,
    pub metrics: RunMetrics,
}
