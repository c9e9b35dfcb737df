//! Matching engine.
//!
//! ## How the parts work together
//!
//! ```text
//! alias table ──┐
//!               │  DictionaryBuilder          (dictionary.rs)
//!               └──────────┬──────────
//!                          │  Trie::insert    (trie.rs)
//!                          v
//!                 Dictionaries { work, other, marker }
//!                          │
//! input ── lowercase ──────┼─ Parser::run      (parser.rs)
//!                          │    (1) work pass, once
//!                          │    (2) other passes, bounded
//!                          │    (3) work re-passes, bounded
//!                          │    (4) all-spell marker
//!                          v
//!                   try_match                  (matcher.rs)
//!                     - leftmost position, longest alias
//!                     - TagAction::apply       (action.rs)
//!                     - excise matched span
//!                          │
//!                          v
//!                     ParseResult
//! ```
//!
//! Each call to `try_match` applies at most one alias and shrinks the buffer,
//! so a pass ends either when nothing matches or when the pass limit is hit.
//!
//! ## Responsibilities by module
//!
//! - `trie.rs`: ordered prefix tree from alias characters to a `TagAction`.
//! - `action.rs`: applying a `TagAction` to a result, including the composite
//!   character/sub-type decoder.
//! - `matcher.rs`: the working buffer and the single-match step.
//! - `parser.rs`: the pass sequence.
//! - `metrics.rs`: per-phase timings and match records for verbose runs.
//!
//! ## Debugging
//!
//! The parser logs every match at `debug` level and every empty scan at
//! `trace` level through the `log` facade. The CLI enables output through
//! `RUST_LOG`, e.g. `RUST_LOG=thtag=debug`.

#[path = "engine/action.rs"]
mod action;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/trie.rs"]
mod trie;

#[allow(unused_imports)]
pub use action::{FAMILIAR_SUFFIXES, SEASON_SUFFIXES, decode_composite};
#[allow(unused_imports)]
pub use matcher::{Buffer, Match, try_match};
#[allow(unused_imports)]
pub use metrics::{MatchRecord, Phase, PhaseMetrics, RunMetrics, RunResult};
#[allow(unused_imports)]
pub use parser::Parser;
pub use trie::Trie;
