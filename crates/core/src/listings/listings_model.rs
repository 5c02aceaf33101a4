use serde::{Deserialize, Serialize};

/// A tradable company as published in the listing-status feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListing {
    pub name: String,
    pub symbol: String,
    pub exchange: String,
}

impl CompanyListing {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            exchange: exchange.into(),
        }
    }
}

/// Search rule shared by every listing store.
///
/// A listing matches when its name contains `query` ignoring case, or its
/// symbol equals the upper-cased query. A blank query matches everything.
pub fn matches_query(listing: &CompanyListing, query: &str) -> bool {
    listing
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
        || listing.symbol == query.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> CompanyListing {
        CompanyListing::new("Apple Inc", "AAPL", "NASDAQ")
    }

    #[test]
    fn name_substring_ignores_case() {
        assert!(matches_query(&apple(), "app"));
        assert!(matches_query(&apple(), "PLE I"));
        assert!(!matches_query(&apple(), "microsoft"));
    }

    #[test]
    fn symbol_must_match_exactly() {
        assert!(matches_query(&apple(), "aapl"));
        assert!(!matches_query(&apple(), "aap l"));
        // "AAP" is neither in the name nor the full symbol
        assert!(!matches_query(&CompanyListing::new("Advance Auto", "AAPX", "NYSE"), "aap"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_query(&apple(), ""));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(apple()).unwrap();
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["exchange"], "NASDAQ");
    }
}
