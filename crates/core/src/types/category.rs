//! Plant categories and the category selector used when browsing.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown plant category: {0}")]
pub struct UnknownCategory(pub String);

/// The fixed set of plant categories the nursery stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tropical,
    #[serde(rename = "Low Light")]
    LowLight,
    Blooming,
    Succulent,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Tropical,
        Self::LowLight,
        Self::Blooming,
        Self::Succulent,
    ];

    /// The display label, which is also the selector value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "Tropical",
            Self::LowLight => "Low Light",
            Self::Blooming => "Blooming",
            Self::Succulent => "Succulent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses an exact display label. No case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// The category selection applied to the catalog.
///
/// The selector hands over a raw string: either the sentinel `"All"` or a
/// category label. A label that names no category is kept as-is so that it
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exactly this category label.
    Named(String),
}

impl CategoryFilter {
    /// The selector sentinel meaning "no restriction".
    pub const ALL_LABEL: &'static str = "All";

    /// Interpret a selector value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => label == category.as_str(),
        }
    }

    /// The selector value for this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(label) => label,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Named(category.as_str().to_owned())
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_owned()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_label() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert!("low light".parse::<Category>().is_err());
        assert!("Cactus".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&Category::LowLight).unwrap();
        assert_eq!(json, "\"Low Light\"");
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter = CategoryFilter::parse("All");
        assert_eq!(filter, CategoryFilter::All);
        assert!(Category::ALL.into_iter().all(|c| filter.matches(c)));
    }

    #[test]
    fn test_filter_named_matches_exactly_one() {
        let filter = CategoryFilter::parse("Succulent");
        let matching: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| filter.matches(*c))
            .collect();
        assert_eq!(matching, vec![Category::Succulent]);
    }

    #[test]
    fn test_filter_unknown_matches_nothing() {
        let filter = CategoryFilter::parse("Cactus");
        assert!(Category::ALL.into_iter().all(|c| !filter.matches(c)));

        // Case matters for the selector value.
        let filter = CategoryFilter::parse("succulent");
        assert!(!filter.matches(Category::Succulent));
    }
}
