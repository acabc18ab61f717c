use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Rule that picks which tracked orders a cancel key press removes.
/// Ask variants only consider `OrderSide::Sell` orders, bid variants only `OrderSide::Buy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelPolicyKind {
    None,
    MostRecent,
    MostRecentAsk,
    MostRecentBid,
    Oldest,
    OldestAsk,
    OldestBid,
    All,
    AllAsks,
    AllBids,
    /// Lowest priced ask, the most recent one among equally priced
    ClosestAsk,
    /// Highest priced bid, the most recent one among equally priced
    ClosestBid,
    /// Highest priced ask, the most recent one among equally priced
    FurthestAsk,
    /// Lowest priced bid, the most recent one among equally priced
    FurthestBid,
}

impl CancelPolicyKind {
    /// All policies in the order the cancel key table lists them
    pub const ALL_KINDS: [CancelPolicyKind; 14] = [
        CancelPolicyKind::None,
        CancelPolicyKind::MostRecent,
        CancelPolicyKind::MostRecentAsk,
        CancelPolicyKind::MostRecentBid,
        CancelPolicyKind::Oldest,
        CancelPolicyKind::OldestAsk,
        CancelPolicyKind::OldestBid,
        CancelPolicyKind::All,
        CancelPolicyKind::AllAsks,
        CancelPolicyKind::AllBids,
        CancelPolicyKind::ClosestAsk,
        CancelPolicyKind::ClosestBid,
        CancelPolicyKind::FurthestAsk,
        CancelPolicyKind::FurthestBid,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            CancelPolicyKind::None => "None",
            CancelPolicyKind::MostRecent => "Most recent",
            CancelPolicyKind::MostRecentAsk => "Most recent ask",
            CancelPolicyKind::MostRecentBid => "Most recent bid",
            CancelPolicyKind::Oldest => "Oldest",
            CancelPolicyKind::OldestAsk => "Oldest ask",
            CancelPolicyKind::OldestBid => "Oldest bid",
            CancelPolicyKind::All => "All",
            CancelPolicyKind::AllAsks => "All asks",
            CancelPolicyKind::AllBids => "All bids",
            CancelPolicyKind::ClosestAsk => "Closest ask",
            CancelPolicyKind::ClosestBid => "Closest bid",
            CancelPolicyKind::FurthestAsk => "Furthest ask",
            CancelPolicyKind::FurthestBid => "Furthest bid",
        }
    }
}

impl Display for CancelPolicyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBinding {
    /// Label shown to the user, selection never depends on it
    pub description: String,
    pub kind: CancelPolicyKind,
}

impl CancelBinding {
    pub fn new(description: impl Into<String>, kind: CancelPolicyKind) -> Self {
        Self {
            description: description.into(),
            kind,
        }
    }

    pub fn from_kind(kind: CancelPolicyKind) -> Self {
        Self::new(kind.description(), kind)
    }
}
