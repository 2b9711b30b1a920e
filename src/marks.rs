//! Ordered, configurable set of marks.
//!
//! The order of the set is the turn order: after a move with mark `i`,
//! the next expected mark is `i + 1`, wrapping to the first mark after
//! the last.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Index of a mark within its [`MarkSet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{}", _0)]
pub struct MarkId(usize);

impl MarkId {
    /// Position of the mark in turn order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The marks legal in a game, in turn order.
///
/// Serializes as a plain list of symbols. Deserializing goes through
/// [`MarkSet::new`], so the same rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MarkSet {
    marks: Vec<String>,
}

impl MarkSet {
    /// Builds a mark set from symbols in turn order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when fewer than two marks are given, when a
    /// mark is empty or carries surrounding whitespace, or when a mark repeats.
    #[track_caller]
    #[instrument(skip(marks))]
    pub fn new<I, S>(marks: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let marks: Vec<String> = marks.into_iter().map(Into::into).collect();

        if marks.len() < 2 {
            return Err(ConfigError::new(format!(
                "At least two marks are required, got {}",
                marks.len()
            )));
        }

        for (i, mark) in marks.iter().enumerate() {
            if mark.is_empty() || mark.trim() != mark {
                return Err(ConfigError::new(format!(
                    "Mark '{}' must be non-empty without surrounding whitespace",
                    mark
                )));
            }
            if marks[..i].contains(mark) {
                return Err(ConfigError::new(format!("Duplicate mark '{}'", mark)));
            }
        }

        Ok(Self { marks })
    }

    /// Number of marks in the set.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false; a valid set holds at least two marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a symbol. Comparison is case-sensitive.
    pub fn id_of(&self, symbol: &str) -> Option<MarkId> {
        self.marks.iter().position(|m| m == symbol).map(MarkId)
    }

    /// Symbol for a mark id.
    ///
    /// An id from another set that is out of range maps to an empty string.
    pub fn symbol(&self, id: MarkId) -> &str {
        self.marks.get(id.0).map(String::as_str).unwrap_or_default()
    }

    /// Cyclic successor of `id` in turn order.
    pub fn successor(&self, id: MarkId) -> MarkId {
        MarkId((id.0 % self.marks.len() + 1) % self.marks.len())
    }

    /// First mark in turn order.
    pub fn first(&self) -> MarkId {
        MarkId(0)
    }

    /// Iterates over the symbols in turn order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().map(String::as_str)
    }

    /// Width in chars of the widest symbol.
    pub(crate) fn max_width(&self) -> usize {
        self.marks.iter().map(|m| m.chars().count()).max().unwrap_or(1)
    }
}

impl TryFrom<Vec<String>> for MarkSet {
    type Error = ConfigError;

    fn try_from(marks: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(marks)
    }
}

impl From<MarkSet> for Vec<String> {
    fn from(set: MarkSet) -> Self {
        set.marks
    }
}

impl Default for MarkSet {
    /// Two marks, "X" then "O".
    fn default() -> Self {
        Self {
            marks: vec!["X".to_string(), "O".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_x_then_o() {
        let marks = MarkSet::default();
        assert_eq!(marks.symbols().collect::<Vec<_>>(), vec!["X", "O"]);
        assert_eq!(marks.id_of("X"), Some(marks.first()));
    }

    #[test]
    fn test_successor_wraps() {
        let marks = MarkSet::new(["A", "B", "C"]).unwrap();
        let a = marks.id_of("A").unwrap();
        let b = marks.successor(a);
        let c = marks.successor(b);
        assert_eq!(marks.symbol(b), "B");
        assert_eq!(marks.symbol(c), "C");
        assert_eq!(marks.successor(c), a);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let marks = MarkSet::default();
        assert_eq!(marks.id_of("x"), None);
        assert_eq!(marks.id_of("L"), None);
    }

    #[test]
    fn test_rejects_single_mark() {
        let err = MarkSet::new(["X"]).unwrap_err();
        assert!(err.message.contains("At least two marks"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MarkSet::new(["X", "O", "X"]).unwrap_err();
        assert!(err.message.contains("Duplicate"));
    }

    #[test]
    fn test_rejects_blank_and_padded_marks() {
        assert!(MarkSet::new(["X", ""]).is_err());
        assert!(MarkSet::new(["X", " O"]).is_err());
    }

    #[test]
    fn test_deserialize_applies_mark_rules() {
        let marks: MarkSet = serde_json::from_str(r#"["X", "O", "Z"]"#).unwrap();
        assert_eq!(marks.len(), 3);

        assert!(serde_json::from_str::<MarkSet>(r#"["X", "X"]"#).is_err());
        assert!(serde_json::from_str::<MarkSet>(r#"["X"]"#).is_err());
        assert!(serde_json::from_str::<MarkSet>(r#"["X", ""]"#).is_err());
    }

    #[test]
    fn test_serializes_as_symbol_list() {
        let json = serde_json::to_string(&MarkSet::default()).unwrap();
        assert_eq!(json, r#"["X","O"]"#);
        let back: MarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MarkSet::default());
    }

    #[test]
    fn test_max_width() {
        let marks = MarkSet::new(["X", "OO", "Z"]).unwrap();
        assert_eq!(marks.max_width(), 2);
    }
}
