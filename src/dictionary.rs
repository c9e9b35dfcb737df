//! Alias dictionaries and their builder.
//!
//! Two tries are kept apart: one for works and one for everything else
//! (ranks, routes, characters, sub-types and composite character+sub-type
//! aliases). Aliases are lower-cased on registration to match the case-folded
//! parse buffer. Registering the same alias twice in one dictionary is an
//! error; nothing is ever overwritten.

use crate::engine::Trie;
use crate::{Error, Result, TagAction};
use log::debug;
use std::fmt;

/// Default marker for "all spell cards captured".
pub const DEFAULT_ALL_SPELL_MARKER: &str = "全卡";

/// Selects one of the two dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictKind {
    Work,
    Other,
}

impl fmt::Display for DictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictKind::Work => f.write_str("work"),
            DictKind::Other => f.write_str("other"),
        }
    }
}

/// The compiled alias tables. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    work: Trie,
    other: Trie,
    marker: String,
    marker_chars: Vec<char>,
}

impl Dictionaries {
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    pub fn work(&self) -> &Trie {
        &self.work
    }

    pub fn other(&self) -> &Trie {
        &self.other
    }

    pub fn get(&self, kind: DictKind) -> &Trie {
        match kind {
            DictKind::Work => &self.work,
            DictKind::Other => &self.other,
        }
    }

    /// Lower-cased all-spell marker.
    pub fn all_spell_marker(&self) -> &str {
        &self.marker
    }

    pub(crate) fn all_spell_marker_chars(&self) -> &[char] {
        &self.marker_chars
    }
}

/// Collects alias registrations into [`Dictionaries`].
///
/// ```
/// use thtag::{Dictionaries, TagAction};
///
/// let mut builder = Dictionaries::builder();
/// builder.register_work("6", &["W6"])?;
/// builder.register_other(TagAction::AddCharacter, "Reimu", &["RM"])?;
/// let dicts = builder.build();
///
/// let res = thtag::parse_with("w6 rm", &dicts, &Default::default())?;
/// assert_eq!(res.work.as_deref(), Some("6"));
/// # Ok::<(), thtag::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    work: Trie,
    other: Trie,
    marker: String,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self { work: Trie::new(), other: Trie::new(), marker: DEFAULT_ALL_SPELL_MARKER.to_string() }
    }

    /// Register one alias with an explicit action.
    pub fn register(&mut self, kind: DictKind, alias: &str, action: TagAction) -> Result<&mut Self> {
        if alias.is_empty() {
            return Err(Error::EmptyAlias { label: action.label().to_string() });
        }

        let key = alias.to_lowercase();
        let trie = match kind {
            DictKind::Work => &mut self.work,
            DictKind::Other => &mut self.other,
        };
        if !trie.insert(&key, action) {
            return Err(Error::DuplicateAlias { dict: kind, alias: key });
        }
        Ok(self)
    }

    /// Register `aliases` as setting the work to `label`.
    pub fn register_work(&mut self, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        for alias in aliases {
            self.register(DictKind::Work, alias, TagAction::SetWork(label.to_string()))?;
        }
        Ok(self)
    }

    /// Register `aliases` in the other dictionary, with the action built by
    /// `make` from `label` (typically a `TagAction` variant constructor).
    pub fn register_other(&mut self, make: fn(String) -> TagAction, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        for alias in aliases {
            self.register(DictKind::Other, alias, make(label.to_string()))?;
        }
        Ok(self)
    }

    pub fn rank(&mut self, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        self.register_other(TagAction::SetRank, label, aliases)
    }

    pub fn route(&mut self, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        self.register_other(TagAction::AddRoute, label, aliases)
    }

    pub fn character(&mut self, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        self.register_other(TagAction::AddCharacter, label, aliases)
    }

    pub fn ctype(&mut self, label: &str, aliases: &[&str]) -> Result<&mut Self> {
        self.register_other(TagAction::AddCType, label, aliases)
    }

    /// Register a composite `<character><suffix>` label under its own name.
    pub fn composite(&mut self, label: &str) -> Result<&mut Self> {
        self.register_other(TagAction::DecodeComposite, label, &[label])
    }

    /// Replace the all-spell marker. Stored lower-cased.
    pub fn all_spell_marker(&mut self, marker: &str) -> &mut Self {
        self.marker = marker.to_lowercase();
        self
    }

    pub fn build(self) -> Dictionaries {
        debug!("[dictionaries] built: work={} other={} marker={:?}", self.work.len(), self.other.len(), self.marker);
        let marker_chars = self.marker.chars().collect();
        Dictionaries { work: self.work, other: self.other, marker: self.marker, marker_chars }
    }
}
