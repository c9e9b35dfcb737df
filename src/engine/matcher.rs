//! Working buffer and the single-match step.
//!
//! ```text
//! buffer:  [ ' ', '6', 'a', ' ', 'r', 'm' ]
//!                  ^ i = 1: try n = min(max_key_len, len - i) .. 1
//!                  "6a" found -> apply, splice out 1..3
//! buffer:  [ ' ', ' ', 'r', 'm' ]
//! ```
//!
//! Positions are scanned left to right and the longest alias at the first
//! matching position wins. Only one alias is applied per call.

use super::trie::Trie;
use crate::{ParseResult, TagAction};

/// Lower-cased input being consumed by a parse, one `char` per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    chars: Vec<char>,
}

impl Buffer {
    /// Case-fold `text` into a new buffer.
    pub fn new(text: &str) -> Self {
        Self { chars: text.to_lowercase().chars().collect() }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Character index of the first occurrence of `needle`.
    pub fn find(&self, needle: &[char]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.chars.len() {
            return None;
        }
        self.chars.windows(needle.len()).position(|w| w == needle)
    }

    /// Drop `len` characters starting at `start`, joining what was before and
    /// after the span into a new buffer.
    pub fn excise(&mut self, start: usize, len: usize) {
        let end = (start + len).min(self.chars.len());
        let mut next = Vec::with_capacity(self.chars.len() - (end - start));
        next.extend_from_slice(&self.chars[..start]);
        next.extend_from_slice(&self.chars[end..]);
        self.chars = next;
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// One applied alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Character index in the buffer before the span was removed.
    pub start: usize,
    /// The (lower-cased) alias text that matched.
    pub alias: String,
    pub action: TagAction,
}

/// Find the leftmost, longest alias of `dict` in `buffer`, apply it to
/// `result` and remove it from the buffer.
///
/// `max_key_len` caps candidate alias length for the whole parse, regardless
/// of how much the buffer has shrunk. Returns `None` and leaves the buffer
/// untouched when nothing matches.
pub fn try_match(result: &mut ParseResult, dict: &Trie, buffer: &mut Buffer, max_key_len: usize) -> Option<Match> {
    let chars = buffer.as_chars();
    let found = (0..chars.len()).find_map(|start| {
        dict.longest_match(&chars[start..], max_key_len).map(|(len, action)| (start, len, action.clone()))
    });

    let (start, len, action) = found?;
    let alias: String = chars[start..start + len].iter().collect();

    action.apply(result);
    buffer.excise(start, len);

    Some(Match { start, alias, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, TagAction)]) -> Trie {
        let mut trie = Trie::new();
        for (key, action) in entries {
            assert!(trie.insert(key, action.clone()));
        }
        trie
    }

    fn rank(label: &str) -> TagAction {
        TagAction::SetRank(label.to_string())
    }

    #[test]
    fn buffer_is_case_folded() {
        let buffer = Buffer::new("EoSD 灵梦");
        assert_eq!(buffer.to_string(), "eosd 灵梦");
        assert_eq!(buffer.len(), 7);
    }

    #[test]
    fn excise_joins_prefix_and_suffix() {
        let mut buffer = Buffer::new("abcdef");
        buffer.excise(1, 2);
        assert_eq!(buffer.to_string(), "adef");
        buffer.excise(3, 1);
        assert_eq!(buffer.to_string(), "ade");
        buffer.excise(0, 3);
        assert!(buffer.is_empty());
    }

    #[test]
    fn find_locates_first_occurrence() {
        let buffer = Buffer::new("全卡 x 全卡");
        let needle: Vec<char> = "全卡".chars().collect();
        assert_eq!(buffer.find(&needle), Some(0));
        assert_eq!(Buffer::new("x").find(&needle), None);
        assert_eq!(buffer.find(&[]), None);
    }

    #[test]
    fn longer_alias_wins_at_same_position() {
        let trie = dict(&[("ex", rank("Extra")), ("extra", rank("Extra2"))]);
        let mut res = ParseResult::new();
        let mut buffer = Buffer::new("extra");

        let m = try_match(&mut res, &trie, &mut buffer, 5).unwrap();

        assert_eq!(m.alias, "extra");
        assert_eq!(res.rank.as_deref(), Some("Extra2"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn leftmost_position_wins_over_longer_alias_later() {
        let trie = dict(&[("n", rank("Normal")), ("lunatic", rank("Lunatic"))]);
        let mut res = ParseResult::new();
        let mut buffer = Buffer::new("n lunatic");

        let m = try_match(&mut res, &trie, &mut buffer, 9).unwrap();

        assert_eq!(m.start, 0);
        assert_eq!(res.rank.as_deref(), Some("Normal"));
        assert_eq!(buffer.to_string(), " lunatic");
    }

    #[test]
    fn max_key_len_bounds_candidates() {
        let trie = dict(&[("ab", rank("AB")), ("a", rank("A"))]);
        let mut res = ParseResult::new();
        let mut buffer = Buffer::new("ab");

        try_match(&mut res, &trie, &mut buffer, 1).unwrap();

        assert_eq!(res.rank.as_deref(), Some("A"));
        assert_eq!(buffer.to_string(), "b");
    }

    #[test]
    fn no_match_leaves_buffer_untouched() {
        let trie = dict(&[("rm", TagAction::AddCharacter("Reimu".to_string()))]);
        let mut res = ParseResult::new();
        let mut buffer = Buffer::new("r m");

        assert_eq!(try_match(&mut res, &trie, &mut buffer, 3), None);
        assert_eq!(buffer.to_string(), "r m");
        assert!(res.is_empty());
    }

    #[test]
    fn match_inside_text_splices_remainder() {
        let trie = dict(&[("6a", TagAction::AddRoute("6A".to_string()))]);
        let mut res = ParseResult::new();
        let mut buffer = Buffer::new(" 6A rm");

        let m = try_match(&mut res, &trie, &mut buffer, 6).unwrap();

        assert_eq!(m.start, 1);
        assert_eq!(m.alias, "6a");
        assert_eq!(buffer.to_string(), "  rm");
        assert!(res.route.contains("6A"));
    }
}
