//! Longest-match alias tagging for Touhou score and replay descriptions.
//!
//! Free-form text such as `"红魔乡 灵梦 L 全卡"` is tagged by repeatedly finding the
//! longest known alias, applying the tag it stands for and cutting it out of the
//! text, until nothing more matches:
//!
//! ```
//! let res = thtag::parse("红魔乡 灵梦 全卡").unwrap();
//!
//! assert_eq!(res.work.as_deref(), Some("6"));
//! assert!(res.character.contains("Reimu"));
//! assert!(res.all_spell);
//! ```
//!
//! Aliases live in two dictionaries (one for works, one for everything else),
//! see [`Dictionaries`]. The built-in table is compiled on first use; custom
//! tables can be assembled with [`Dictionaries::builder`].

#[macro_use]
mod macros;
mod api;
mod dictionary;
mod engine;
mod error;
mod rules;

use std::collections::BTreeSet;
use std::fmt;

pub use api::{
    MatchSummary, Options, ParseDetails, ParseResultVerbose, PhaseSummary, default_dictionaries, parse, parse_verbose,
    parse_verbose_with, parse_with,
};
pub use dictionary::{DictKind, Dictionaries, DictionaryBuilder};
pub use engine::{Trie, decode_composite};
pub use error::{Error, Result};

bitflags::bitflags! {
    /// Tag categories, used to describe what an action touches and which
    /// fields of a [`ParseResult`] were filled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Categories: u8 {
        const WORK      = 1 << 0;
        const RANK      = 1 << 1;
        const ROUTE     = 1 << 2;
        const CHARACTER = 1 << 3;
        const CTYPE     = 1 << 4;
        const ALL_SPELL = 1 << 5;
    }
}

/// What happens when an alias matches. Each variant carries the canonical
/// label it applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagAction {
    /// Set the work, unless one is already set.
    SetWork(String),
    /// Set the rank, unless one is already set.
    SetRank(String),
    AddRoute(String),
    AddCharacter(String),
    AddCType(String),
    /// Split a `<character><suffix>` label into a character and a sub-type.
    DecodeComposite(String),
}

impl TagAction {
    /// The canonical label carried by this action.
    pub fn label(&self) -> &str {
        match self {
            TagAction::SetWork(label)
            | TagAction::SetRank(label)
            | TagAction::AddRoute(label)
            | TagAction::AddCharacter(label)
            | TagAction::AddCType(label)
            | TagAction::DecodeComposite(label) => label,
        }
    }

    /// The result fields this action may write to.
    pub fn categories(&self) -> Categories {
        match self {
            TagAction::SetWork(_) => Categories::WORK,
            TagAction::SetRank(_) => Categories::RANK,
            TagAction::AddRoute(_) => Categories::ROUTE,
            TagAction::AddCharacter(_) => Categories::CHARACTER,
            TagAction::AddCType(_) => Categories::CTYPE,
            TagAction::DecodeComposite(_) => Categories::CHARACTER | Categories::CTYPE,
        }
    }

    /// Short lowercase name of the action kind, for reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TagAction::SetWork(_) => "work",
            TagAction::SetRank(_) => "rank",
            TagAction::AddRoute(_) => "route",
            TagAction::AddCharacter(_) => "character",
            TagAction::AddCType(_) => "ctype",
            TagAction::DecodeComposite(_) => "composite",
        }
    }
}

/// Tags accumulated by one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// First work matched, if any.
    pub work: Option<String>,
    /// First rank matched, if any.
    pub rank: Option<String>,
    pub route: BTreeSet<String>,
    pub character: BTreeSet<String>,
    /// Character sub-types (seasons, familiar types, shot types).
    pub ctype: BTreeSet<String>,
    /// Whether the "all spell cards" marker was present.
    pub all_spell: bool,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `work` unless already set. Returns whether the value was taken.
    pub fn set_work(&mut self, label: &str) -> bool {
        set_first(&mut self.work, label)
    }

    /// Set `rank` unless already set. Returns whether the value was taken.
    pub fn set_rank(&mut self, label: &str) -> bool {
        set_first(&mut self.rank, label)
    }

    pub fn add_route(&mut self, label: &str) {
        self.route.insert(label.to_string());
    }

    pub fn add_character(&mut self, label: &str) {
        self.character.insert(label.to_string());
    }

    pub fn add_ctype(&mut self, label: &str) {
        self.ctype.insert(label.to_string());
    }

    /// Categories with at least one value.
    pub fn categories(&self) -> Categories {
        let mut found = Categories::empty();
        found.set(Categories::WORK, self.work.is_some());
        found.set(Categories::RANK, self.rank.is_some());
        found.set(Categories::ROUTE, !self.route.is_empty());
        found.set(Categories::CHARACTER, !self.character.is_empty());
        found.set(Categories::CTYPE, !self.ctype.is_empty());
        found.set(Categories::ALL_SPELL, self.all_spell);
        found
    }

    /// True when nothing at all was tagged.
    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }
}

fn set_first(slot: &mut Option<String>, label: &str) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(label.to_string());
    true
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(set: &BTreeSet<String>) -> String {
            set.iter().map(String::as_str).collect::<Vec<_>>().join(",")
        }

        write!(
            f,
            "work={} rank={} route=[{}] character=[{}] ctype=[{}] all_spell={}",
            self.work.as_deref().unwrap_or("-"),
            self.rank.as_deref().unwrap_or("-"),
            join(&self.route),
            join(&self.character),
            join(&self.ctype),
            self.all_spell
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_fields_keep_first_value() {
        let mut res = ParseResult::new();
        assert!(res.set_work("6"));
        assert!(!res.set_work("7"));
        assert!(res.set_rank("Hard"));
        assert!(!res.set_rank("Easy"));

        assert_eq!(res.work.as_deref(), Some("6"));
        assert_eq!(res.rank.as_deref(), Some("Hard"));
    }

    #[test]
    fn categories_track_filled_fields() {
        let mut res = ParseResult::new();
        assert!(res.is_empty());

        res.add_character("Reimu");
        res.add_character("Reimu");
        res.all_spell = true;

        assert_eq!(res.character.len(), 1);
        assert_eq!(res.categories(), Categories::CHARACTER | Categories::ALL_SPELL);
    }

    #[test]
    fn display_is_compact() {
        let mut res = ParseResult::new();
        res.set_work("15");
        res.add_character("Marisa");
        res.add_character("Alice");

        assert_eq!(res.to_string(), "work=15 rank=- route=[] character=[Alice,Marisa] ctype=[] all_spell=false");
    }

    #[test]
    fn composite_action_touches_two_categories() {
        let action = TagAction::DecodeComposite("ReimuSA".to_string());
        assert_eq!(action.label(), "ReimuSA");
        assert_eq!(action.categories(), Categories::CHARACTER | Categories::CTYPE);
        assert_eq!(action.kind_name(), "composite");
    }
}
