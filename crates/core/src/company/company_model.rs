use serde::{Deserialize, Serialize};
use stockmarket_market_data::CompanyOverview;

/// Company profile shown on the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub symbol: String,
    pub company_name: String,
    pub exchange: String,
    pub description: String,
    pub industry: String,
    pub country: String,
}

impl CompanyInfo {
    /// Maps a provider overview, defaulting absent text to "".
    ///
    /// Returns `None` when the overview has no company name, which is how
    /// the provider signals an exhausted quota.
    pub fn from_overview(overview: CompanyOverview) -> Option<Self> {
        let company_name = overview.name?;
        Some(Self {
            symbol: overview.symbol.unwrap_or_default(),
            company_name,
            exchange: overview.exchange.unwrap_or_default(),
            description: overview.description.unwrap_or_default(),
            industry: overview.industry.unwrap_or_default(),
            country: overview.country.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_overview_with_defaults() {
        let overview = CompanyOverview {
            symbol: Some("IBM".to_string()),
            name: Some("International Business Machines".to_string()),
            industry: Some("COMPUTER & OFFICE EQUIPMENT".to_string()),
            ..Default::default()
        };

        let info = CompanyInfo::from_overview(overview).unwrap();
        assert_eq!(info.symbol, "IBM");
        assert_eq!(info.company_name, "International Business Machines");
        assert_eq!(info.industry, "COMPUTER & OFFICE EQUIPMENT");
        assert_eq!(info.exchange, "");
        assert_eq!(info.description, "");
        assert_eq!(info.country, "");
    }

    #[test]
    fn missing_name_yields_none() {
        let overview = CompanyOverview {
            symbol: Some("IBM".to_string()),
            note: Some("Thank you for using Alpha Vantage!".to_string()),
            ..Default::default()
        };
        assert!(CompanyInfo::from_overview(overview).is_none());
    }
}
