//! Applying tag actions, including the composite character/sub-type decoder.
//!
//! Composite labels encode a character and a sub-type in one string, e.g.
//! `"ReimuSA"` (Reimu, spring) or `"MarisaW"` (Marisa, wolf). The suffix table
//! is checked in order: two-character season codes first, then single-letter
//! familiar codes. A label with neither suffix is taken whole as the
//! character.

use crate::{ParseResult, TagAction};

/// Two-character season suffixes and the sub-type each one stands for.
pub const SEASON_SUFFIXES: &[(&str, &str)] = &[("SA", "Spring"), ("SB", "Summer"), ("SC", "Autumn"), ("SD", "Winter")];

/// Single-letter familiar suffixes and the sub-type each one stands for.
pub const FAMILIAR_SUFFIXES: &[(char, &str)] = &[('W', "Wolf"), ('O', "Otter"), ('E', "Eagle")];

/// Split a composite label into `(character, sub-type)`.
///
/// An unrecognized suffix yields the whole label and no sub-type.
pub fn decode_composite(label: &str) -> (&str, Option<&'static str>) {
    for (suffix, ctype) in SEASON_SUFFIXES {
        if let Some(character) = label.strip_suffix(*suffix) {
            return (character, Some(*ctype));
        }
    }
    for (suffix, ctype) in FAMILIAR_SUFFIXES {
        if let Some(character) = label.strip_suffix(*suffix) {
            return (character, Some(*ctype));
        }
    }
    (label, None)
}

impl TagAction {
    /// Apply this action to `result`.
    pub fn apply(&self, result: &mut ParseResult) {
        match self {
            TagAction::SetWork(label) => {
                result.set_work(label);
            }
            TagAction::SetRank(label) => {
                result.set_rank(label);
            }
            TagAction::AddRoute(label) => result.add_route(label),
            TagAction::AddCharacter(label) => result.add_character(label),
            TagAction::AddCType(label) => result.add_ctype(label),
            TagAction::DecodeComposite(label) => {
                let (character, ctype) = decode_composite(label);
                if let Some(ctype) = ctype {
                    result.add_ctype(ctype);
                }
                result.add_character(character);
            }
        }
    }
}
