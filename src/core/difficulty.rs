//! Difficulty tiers.
//!
//! A tier picks the word pool a puzzle is drawn from and the multiplier
//! used when scoring it. Hosts address tiers by string id (`"easy"`,
//! `"medium"`, `"hard"`); anything else becomes [`Difficulty::Unrecognized`].

use serde::{Deserialize, Serialize};

/// Difficulty tier of a puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    /// A tier id the engine does not know.
    ///
    /// Draws from the medium pool and scores with the easy multiplier.
    #[serde(other)]
    Unrecognized,
}

impl Difficulty {
    /// The known tiers, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a host tier id. Case-insensitive; unknown ids map to `Unrecognized`.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unrecognized,
        }
    }

    /// Host-facing id of this tier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unrecognized => "unrecognized",
        }
    }

    /// Score multiplier for this tier.
    #[must_use]
    pub const fn multiplier(self) -> i32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 6,
            Difficulty::Hard => 9,
            // Unknown tiers score like easy.
            Difficulty::Unrecognized => 3,
        }
    }

    /// The tier whose word pool this tier draws from.
    #[must_use]
    pub const fn word_pool(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Hard,
            Difficulty::Medium | Difficulty::Unrecognized => Difficulty::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(Difficulty::Easy.multiplier(), 3);
        assert_eq!(Difficulty::Medium.multiplier(), 6);
        assert_eq!(Difficulty::Hard.multiplier(), 9);
        assert_eq!(Difficulty::Unrecognized.multiplier(), 3);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Difficulty::from_id("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_id("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_id("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_id("expert"), Difficulty::Unrecognized);
        assert_eq!(Difficulty::from_id(""), Difficulty::Unrecognized);
    }

    #[test]
    fn test_id_roundtrip_for_known_tiers() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_id(tier.id()), tier);
            assert_eq!(format!("{}", tier), tier.id());
        }
    }

    #[test]
    fn test_word_pool_fallback() {
        assert_eq!(Difficulty::Easy.word_pool(), Difficulty::Easy);
        assert_eq!(Difficulty::Hard.word_pool(), Difficulty::Hard);
        assert_eq!(Difficulty::Unrecognized.word_pool(), Difficulty::Medium);
    }

    #[test]
    fn test_serde_unknown_tag() {
        let hard: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(hard, Difficulty::Hard);

        let unknown: Difficulty = serde_json::from_str("\"nightmare\"").unwrap();
        assert_eq!(unknown, Difficulty::Unrecognized);
    }
}
