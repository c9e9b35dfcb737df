//! Pass orchestration.
//!
//! A parse runs a fixed sequence of phases over one shrinking buffer:
//!
//! ```text
//! (1) work        try_match(work)   x 1
//! (2) other       try_match(other)  x pass_limit, stop at first miss
//! (3) work-rescan try_match(work)   x pass_limit, stop at first miss
//! (4) all-spell   remove first occurrence of the marker, if any
//! ```
//!
//! Works go first so that work names are not split up by shorter character
//! or rank aliases hiding inside them. The rescan picks up work aliases that
//! only become contiguous once other tokens between their characters have
//! been cut out.
//!
//! Every attempt either removes at least one character or ends its phase, so
//! a parse makes at most `1 + 2 * pass_limit` match attempts.

use super::matcher::{Buffer, try_match};
use super::metrics::{MatchRecord, Phase, PhaseMetrics, RunMetrics, RunResult};
use super::trie::Trie;
use crate::{Dictionaries, Error, Options, ParseResult, Result};
use log::{debug, trace};
use std::time::Instant;

/// Runs the phase sequence for one input.
///
/// Usage: `Parser::new(input, &dicts, &options)?.run()`.
#[derive(Debug)]
pub struct Parser<'a> {
    dicts: &'a Dictionaries,
    buffer: Buffer,
    /// Character count of the original input; caps alias length for every pass.
    max_key_len: usize,
    pass_limit: usize,
}

impl<'a> Parser<'a> {
    /// Prepare a parse of `input`. Fails on empty input.
    pub fn new(input: &str, dicts: &'a Dictionaries, options: &Options) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self { dicts, buffer: Buffer::new(input), max_key_len: input.chars().count(), pass_limit: options.pass_limit })
    }

    /// Run all phases and return the accumulated tags.
    pub fn run(self) -> ParseResult {
        self.run_with_metrics().result
    }

    /// Run all phases, also returning per-phase metrics and the leftover text.
    pub fn run_with_metrics(mut self) -> RunResult {
        let started = Instant::now();
        let mut result = ParseResult::new();
        let dicts = self.dicts;

        debug!("[parse] buffer={:?} max_key_len={}", self.buffer.to_string(), self.max_key_len);

        let phases = vec![
            self.run_phase(&mut result, Phase::Work, dicts.work(), 1),
            self.run_phase(&mut result, Phase::Other, dicts.other(), self.pass_limit),
            self.run_phase(&mut result, Phase::WorkRescan, dicts.work(), self.pass_limit),
            self.check_all_spell(&mut result),
        ];

        let leftover = self.buffer.to_string();
        debug!("[parse] result: {result} leftover={leftover:?} ({} chars)", self.buffer.len());

        RunResult { result, metrics: RunMetrics { total: started.elapsed(), phases, leftover } }
    }

    fn run_phase(&mut self, result: &mut ParseResult, phase: Phase, dict: &Trie, limit: usize) -> PhaseMetrics {
        let started = Instant::now();
        let mut metrics = PhaseMetrics::new(phase);

        for _ in 0..limit {
            metrics.attempts += 1;
            match try_match(result, dict, &mut self.buffer, self.max_key_len) {
                Some(m) => {
                    debug!("[{phase}] matched {:?} at {} -> {} {}", m.alias, m.start, m.action.kind_name(), m.action.label());
                    metrics.matches.push(MatchRecord::new(phase, m));
                }
                None => {
                    trace!("[{phase}] no match in {:?}", self.buffer.to_string());
                    break;
                }
            }
        }

        metrics.duration = started.elapsed();
        metrics
    }

    fn check_all_spell(&mut self, result: &mut ParseResult) -> PhaseMetrics {
        let started = Instant::now();
        let mut metrics = PhaseMetrics::new(Phase::AllSpell);
        let marker = self.dicts.all_spell_marker_chars();

        metrics.attempts = 1;
        if self.buffer.is_empty() {
            trace!("[{}] buffer exhausted", Phase::AllSpell);
        } else if let Some(start) = self.buffer.find(marker) {
            debug!("[{}] marker {:?} at {start}", Phase::AllSpell, self.dicts.all_spell_marker());
            result.all_spell = true;
            self.buffer.excise(start, marker.len());
        }

        metrics.duration = started.elapsed();
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagAction;

    /// Small table using the placeholder aliases from the README examples.
    fn placeholder_dicts() -> Dictionaries {
        let mut builder = Dictionaries::builder();
        builder.register_work("6", &["W6"]).unwrap();
        builder.register_work("7", &["W7"]).unwrap();
        builder.register_other(TagAction::SetRank, "Normal", &["N"]).unwrap();
        builder.register_other(TagAction::SetRank, "Hard", &["H"]).unwrap();
        builder.register_other(TagAction::AddCharacter, "Reimu", &["RM"]).unwrap();
        builder.register_other(TagAction::AddCharacter, "Marisa", &["MR"]).unwrap();
        builder.register_other(TagAction::DecodeComposite, "ReimuSA", &["RMSA"]).unwrap();
        builder.register_other(TagAction::AddRoute, "6A", &["R6A"]).unwrap();
        builder.all_spell_marker("ALLSPELL");
        builder.build()
    }

    fn parse(input: &str, dicts: &Dictionaries) -> ParseResult {
        Parser::new(input, dicts, &Options::default()).unwrap().run()
    }

    #[test]
    fn work_rank_and_character() {
        let dicts = placeholder_dicts();
        let res = parse("W6 N RM", &dicts);

        assert_eq!(res.work.as_deref(), Some("6"));
        assert_eq!(res.rank.as_deref(), Some("Normal"));
        assert_eq!(res.character.iter().collect::<Vec<_>>(), vec!["Reimu"]);
        assert!(res.route.is_empty());
        assert!(res.ctype.is_empty());
        assert!(!res.all_spell);
    }

    #[test]
    fn composite_alias_beats_its_prefix() {
        let dicts = placeholder_dicts();
        let res = parse("RMSA", &dicts);

        assert_eq!(res.character.iter().collect::<Vec<_>>(), vec!["Reimu"]);
        assert_eq!(res.ctype.iter().collect::<Vec<_>>(), vec!["Spring"]);
        assert_eq!(res.work, None);
        assert_eq!(res.rank, None);
    }

    #[test]
    fn empty_input_is_rejected() {
        let dicts = placeholder_dicts();
        assert_eq!(Parser::new("", &dicts, &Options::default()).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn marker_sets_all_spell() {
        let dicts = placeholder_dicts();
        let run = Parser::new("W6 allspell", &dicts, &Options::default()).unwrap().run_with_metrics();

        assert_eq!(run.result.work.as_deref(), Some("6"));
        assert!(run.result.all_spell);
        assert_eq!(run.metrics.leftover, " ");
    }

    #[test]
    fn marker_removes_only_first_occurrence() {
        let dicts = placeholder_dicts();
        let run = Parser::new("AllSpell AllSpell", &dicts, &Options::default()).unwrap().run_with_metrics();

        assert!(run.result.all_spell);
        assert_eq!(run.metrics.leftover, " allspell");
    }

    #[test]
    fn repeated_character_is_a_set() {
        let dicts = placeholder_dicts();
        let res = parse("RM RM", &dicts);

        assert_eq!(res.character.len(), 1);
        assert!(res.character.contains("Reimu"));
    }

    #[test]
    fn first_work_and_rank_win() {
        let dicts = placeholder_dicts();
        let res = parse("W7 H W6 N", &dicts);

        assert_eq!(res.work.as_deref(), Some("7"));
        assert_eq!(res.rank.as_deref(), Some("Hard"));
    }

    #[test]
    fn characters_accumulate() {
        let dicts = placeholder_dicts();
        let res = parse("MR RM MR R6A", &dicts);

        assert_eq!(res.character.iter().collect::<Vec<_>>(), vec!["Marisa", "Reimu"]);
        assert!(res.route.contains("6A"));
    }

    #[test]
    fn rescan_finds_work_exposed_by_other_matches() {
        let dicts = placeholder_dicts();
        let run = Parser::new("WRM6", &dicts, &Options::default()).unwrap().run_with_metrics();

        assert_eq!(run.result.work.as_deref(), Some("6"));
        assert!(run.result.character.contains("Reimu"));

        let rescan = run.metrics.phases.iter().find(|p| p.phase == Phase::WorkRescan).unwrap();
        assert_eq!(rescan.matches.len(), 1);
        assert_eq!(rescan.matches[0].alias, "w6");
    }

    #[test]
    fn case_is_folded_before_matching() {
        let dicts = placeholder_dicts();
        let res = parse("w6 n rm", &dicts);

        assert_eq!(res.work.as_deref(), Some("6"));
        assert_eq!(res.rank.as_deref(), Some("Normal"));
    }

    #[test]
    fn fully_consumed_input_skips_marker() {
        let dicts = placeholder_dicts();
        let run = Parser::new("W6RM", &dicts, &Options::default()).unwrap().run_with_metrics();

        assert!(!run.result.all_spell);
        assert_eq!(run.metrics.leftover, "");
        assert_eq!(run.metrics.phases.last().map(|p| p.attempts), Some(1));
    }

    #[test]
    fn passes_are_bounded() {
        let dicts = placeholder_dicts();
        let input = "RM".repeat(50);
        let run = Parser::new(&input, &dicts, &Options::default()).unwrap().run_with_metrics();

        // 1 work attempt, 10 other matches (the limit), 1 failed rescan attempt.
        assert_eq!(run.metrics.match_attempts(), 12);
        assert_eq!(run.metrics.matches().count(), 10);
        assert_eq!(run.metrics.leftover, "rm".repeat(40));
        assert!(run.metrics.match_attempts() <= 21);
    }

    #[test]
    fn attempts_never_exceed_bound_on_overlapping_fragments() {
        let dicts = placeholder_dicts();
        let inputs = vec![
            "W6W6W6W6W6W6W6W6W6W6W6W6W6".to_string(),
            "RMSARMSARMSA".to_string(),
            "WRWRM66MM66".to_string(),
            "W".repeat(40) + &"6".repeat(40),
        ];

        for input in &inputs {
            let run = Parser::new(input, &dicts, &Options::default()).unwrap().run_with_metrics();
            assert!(run.metrics.match_attempts() <= 21, "input {input:?}");
        }
    }

    #[test]
    fn pass_limit_is_configurable() {
        let dicts = placeholder_dicts();
        let options = Options { pass_limit: 2 };
        let run = Parser::new("RM MR RM", &dicts, &options).unwrap().run_with_metrics();

        let other = run.metrics.phases.iter().find(|p| p.phase == Phase::Other).unwrap();
        assert_eq!(other.attempts, 2);
        assert_eq!(run.result.character.len(), 2);
        assert_eq!(run.metrics.leftover, "  rm");
    }

    #[test]
    fn unmatched_text_is_silently_discarded() {
        let dicts = placeholder_dicts();
        let run = Parser::new("nothing here", &dicts, &Options::default()).unwrap().run_with_metrics();

        assert_eq!(run.result.rank.as_deref(), Some("Normal"));
        assert_eq!(run.metrics.phases.len(), 4);
    }
}
