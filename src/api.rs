use crate::engine::{self, RunResult};
use crate::{Dictionaries, ParseResult, Result};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_DICTIONARIES: Lazy<Dictionaries> = Lazy::new(|| {
    crate::rules::aliases::get().unwrap_or_else(|err| panic!("built-in alias table is invalid: {err}"))
});

/// The built-in dictionaries, compiled on first use and shared afterwards.
pub fn default_dictionaries() -> &'static Dictionaries {
    &DEFAULT_DICTIONARIES
}

/// Options that affect parsing.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of match attempts in each of the bounded passes (the
    /// other-dictionary pass and the work rescan).
    pub pass_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { pass_limit: 10 }
    }
}

/// One applied alias, as reported by [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct MatchSummary {
    /// Character index in the buffer at the time of the match.
    pub start: usize,
    pub alias: String,
    /// Action kind, e.g. `"character"` or `"composite"`.
    pub kind: &'static str,
    pub label: String,
}

/// Per-phase trace.
#[derive(Debug, Clone)]
pub struct PhaseSummary {
    pub phase: &'static str,
    pub attempts: usize,
    pub duration: Duration,
    pub matches: Vec<MatchSummary>,
}

/// Additional details returned by [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub total: Duration,
    /// Match attempts over the dictionary phases.
    pub attempts: usize,
    /// Number of aliases applied.
    pub matched: usize,
    pub phases: Vec<PhaseSummary>,
    /// Case-folded text nothing matched.
    pub leftover: String,
}

/// Result from [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub result: ParseResult,
    pub details: ParseDetails,
}

/// Tag `text` using the built-in dictionaries and default [`Options`].
///
/// # Example
/// ```
/// let res = thtag::parse("th128 ⑨").unwrap();
///
/// assert_eq!(res.work.as_deref(), Some("128"));
/// assert!(res.character.contains("Cirno"));
/// ```
pub fn parse(text: &str) -> Result<ParseResult> {
    parse_with(text, default_dictionaries(), &Options::default())
}

/// Tag `text` with the given dictionaries and options.
pub fn parse_with(text: &str, dicts: &Dictionaries, options: &Options) -> Result<ParseResult> {
    Ok(engine::Parser::new(text, dicts, options)?.run())
}

pub fn parse_verbose(text: &str) -> Result<ParseResultVerbose> {
    parse_verbose_with(text, default_dictionaries(), &Options::default())
}

/// Tag `text` and also return a per-phase trace of what matched.
pub fn parse_verbose_with(text: &str, dicts: &Dictionaries, options: &Options) -> Result<ParseResultVerbose> {
    let run = engine::Parser::new(text, dicts, options)?.run_with_metrics();
    let RunResult { result, metrics } = run;

    let phases = metrics
        .phases
        .iter()
        .map(|p| PhaseSummary {
            phase: p.phase.name(),
            attempts: p.attempts,
            duration: p.duration,
            matches: p
                .matches
                .iter()
                .map(|m| MatchSummary {
                    start: m.start,
                    alias: m.alias.clone(),
                    kind: m.action.kind_name(),
                    label: m.action.label().to_string(),
                })
                .collect(),
        })
        .collect();

    let details = ParseDetails {
        total: metrics.total,
        attempts: metrics.match_attempts(),
        matched: metrics.matches().count(),
        phases,
        leftover: metrics.leftover,
    };

    Ok(ParseResultVerbose { text: text.to_string(), result, details })
}

impl ParseDetails {
    /// Matches from the named phase.
    pub fn phase(&self, name: &str) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.phase == name)
    }
}
