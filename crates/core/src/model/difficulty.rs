/// Difficulty tier of a question.
///
/// Labels are matched case-insensitively. Anything outside the three known
/// tiers is kept verbatim as `Other` and ranks after `Hard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// The known tiers, in rank order.
    pub const TIERS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other(label.to_owned()),
        }
    }

    /// Sort rank: easy 0, medium 1, hard 2, unrecognized 3.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
            Self::Other(_) => 3,
        }
    }

    /// Canonical label of the tier, or the raw text for `Other`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.as_str().to_lowercase()
    }
}
