use constants::category::{CATEGORY_MAP, CategoryInfo, get_category_info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a point of interest.
///
/// Tags outside the known table are kept verbatim so that their markers can
/// still be materialized; no filter button ever refers to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryTag {
    Cafe,
    Food,
    Mart,
    Pharmacy,
    Unknown(String),
}

impl CategoryTag {
    /// Categories that get a filter button, in button order.
    pub const KNOWN: [CategoryTag; 4] = [
        CategoryTag::Cafe,
        CategoryTag::Food,
        CategoryTag::Mart,
        CategoryTag::Pharmacy,
    ];

    /// Parse a wire tag. Matching is exact, as the endpoint sends upper case.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CAFE" => Self::Cafe,
            "FOOD" => Self::Food,
            "MART" => Self::Mart,
            "PHARMACY" => Self::Pharmacy,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Parse a tag coming from an external caller, rejecting unknown tags.
    pub fn known_from_str(tag: &str) -> Option<Self> {
        match Self::from_tag(&tag.to_uppercase()) {
            Self::Unknown(_) => None,
            known => Some(known),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Cafe => "CAFE",
            Self::Food => "FOOD",
            Self::Mart => "MART",
            Self::Pharmacy => "PHARMACY",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Display data from the constants table; `None` for unknown tags.
    pub fn info(&self) -> Option<&'static CategoryInfo> {
        if self.is_known() {
            get_category_info(self.as_tag())
        } else {
            None
        }
    }
}

impl From<String> for CategoryTag {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<CategoryTag> for String {
    fn from(category: CategoryTag) -> Self {
        category.as_tag().to_string()
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Every known category has a row in the constants table.
pub fn known_category_table() -> impl Iterator<Item = (CategoryTag, &'static CategoryInfo)> {
    CATEGORY_MAP
        .iter()
        .map(|info| (CategoryTag::from_tag(info.tag), info))
}
